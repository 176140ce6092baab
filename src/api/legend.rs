use chrono::SecondsFormat;

use crate::core::primitives::unix_seconds_to_datetime;
use crate::render::Renderer;

use super::PlotEngine;

/// Placeholder shown for gaps and when the cursor is not over a sample.
pub const LEGEND_EMPTY_VALUE: &str = "--";

const LEGEND_DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// One label/value line of the plot legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub label: String,
    pub value: String,
}

/// Formats a y sample with the data's unit suffix.
#[must_use]
pub fn format_series_value(value: Option<f64>, dimension: &str) -> String {
    match value {
        Some(value) if dimension.is_empty() => value.to_string(),
        Some(value) => format!("{value} {dimension}"),
        None => LEGEND_EMPTY_VALUE.to_owned(),
    }
}

/// Formats an x value (unix seconds) as `DD.MM.YYYY, HH:mm:ss` in UTC.
#[must_use]
pub fn format_time_value(unix_seconds: f64) -> String {
    unix_seconds_to_datetime(unix_seconds)
        .map(|time| time.format(LEGEND_DATE_FORMAT).to_string())
        .unwrap_or_else(|| LEGEND_EMPTY_VALUE.to_owned())
}

impl<R: Renderer> PlotEngine<R> {
    /// Legend rows for the sample under the cursor.
    ///
    /// The first row is the date of the x sample; one row per y series
    /// follows. Values read `--` while the cursor is hidden.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendRow> {
        let index = self.cursor.index.filter(|_| self.cursor.visible);
        let date = index
            .and_then(|index| self.data.x.get(index).copied())
            .map_or_else(|| LEGEND_EMPTY_VALUE.to_owned(), format_time_value);

        let mut rows = Vec::with_capacity(self.data.series_count() + 1);
        rows.push(LegendRow {
            label: "Date".to_owned(),
            value: date,
        });
        rows.extend((0..self.data.series_count()).map(|series| LegendRow {
            label: self.config.series_options(series).label,
            value: format_series_value(
                index.and_then(|index| self.data.value(series, index)),
                &self.data.dimension,
            ),
        }));
        rows
    }

    /// Cursor time as an RFC 3339 string, for host tooltips.
    #[must_use]
    pub fn cursor_time_rfc3339(&self) -> Option<String> {
        let index = self.cursor.index.filter(|_| self.cursor.visible)?;
        let x = *self.data.x.get(index)?;
        unix_seconds_to_datetime(x).map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
