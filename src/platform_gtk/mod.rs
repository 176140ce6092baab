//! GTK4 embedding: routes `DrawingArea` pointer and scroll controllers into
//! a [`PlotEngine`] and draws it through Cairo.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use gtk::{gdk, glib};
use tracing::warn;

use crate::api::PlotEngine;
use crate::core::Viewport;
use crate::interaction::{PointerButton, PointerEvent, WheelEvent};
use crate::render::CairoRenderer;

pub type SharedPlotEngine = Rc<RefCell<PlotEngine<CairoRenderer>>>;

/// A plot bound to a GTK drawing area.
///
/// Panning is driven by a `GestureDrag` bound to the configured pan button,
/// cursor lock by a primary-button `GestureClick`, motion and leave by an
/// `EventControllerMotion`. Zoom comes from a vertical
/// `EventControllerScroll` anchored at the last pointer position.
pub struct GtkPlotAdapter {
    engine: SharedPlotEngine,
    area: gtk::DrawingArea,
}

impl GtkPlotAdapter {
    #[must_use]
    pub fn new(engine: PlotEngine<CairoRenderer>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let pointer = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

        install_draw_func(&area, &engine);
        install_pan_gesture(&area, &engine);
        if engine.borrow().config().navigation.pan_button != PointerButton::Primary {
            install_click_gesture(&area, &engine);
        }
        install_motion_controller(&area, &engine, &pointer);
        install_scroll_controller(&area, &engine, &pointer);
        install_sync_tick(&area, &engine);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> SharedPlotEngine {
        Rc::clone(&self.engine)
    }
}

fn install_draw_func(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_, context, width, height| {
        let mut engine = engine.borrow_mut();
        if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
            if let Err(err) = engine.set_viewport(Viewport::new(width, height)) {
                warn!(error = %err, "ignoring drawing area resize");
            }
        }
        if !engine.is_ready() {
            engine.ready();
        }
        if let Err(err) = engine.render_on_cairo_context(context) {
            warn!(error = %err, "plot draw failed");
        }
    });
}

fn install_pan_gesture(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let button = engine.borrow().config().navigation.pan_button;
    let drag = gtk::GestureDrag::new();
    drag.set_button(button.gdk_button());

    let begin_engine = Rc::clone(engine);
    drag.connect_drag_begin(move |_, x, y| {
        begin_engine
            .borrow_mut()
            .pointer_down(PointerEvent::new(button, x, y));
    });

    let update_engine = Rc::clone(engine);
    let update_area = area.clone();
    drag.connect_drag_update(move |gesture, offset_x, offset_y| {
        let Some((x, y)) = drag_position(gesture.start_point(), (offset_x, offset_y)) else {
            return;
        };
        update_engine.borrow_mut().pointer_move(x, y);
        update_area.queue_draw();
    });

    let end_engine = Rc::clone(engine);
    let end_area = area.clone();
    drag.connect_drag_end(move |gesture, offset_x, offset_y| {
        let mut engine = end_engine.borrow_mut();
        match drag_position(gesture.start_point(), (offset_x, offset_y)) {
            Some((x, y)) => engine.pointer_up(PointerEvent::new(button, x, y)),
            None => engine.pointer_capture_lost(),
        }
        end_area.queue_draw();
    });

    let cancel_engine = Rc::clone(engine);
    drag.connect_cancel(move |_, _| {
        cancel_engine.borrow_mut().pointer_capture_lost();
    });

    area.add_controller(drag);
}

fn drag_position(start: Option<(f64, f64)>, offset: (f64, f64)) -> Option<(f64, f64)> {
    let (start_x, start_y) = start?;
    Some((start_x + offset.0, start_y + offset.1))
}

fn install_click_gesture(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let click = gtk::GestureClick::new();
    click.set_button(PointerButton::Primary.gdk_button());

    let pressed_engine = Rc::clone(engine);
    let pressed_area = area.clone();
    click.connect_pressed(move |_, _, x, y| {
        pressed_engine
            .borrow_mut()
            .pointer_down(PointerEvent::new(PointerButton::Primary, x, y));
        pressed_area.queue_draw();
    });

    let released_engine = Rc::clone(engine);
    let released_area = area.clone();
    click.connect_released(move |_, _, x, y| {
        released_engine
            .borrow_mut()
            .pointer_up(PointerEvent::new(PointerButton::Primary, x, y));
        released_area.queue_draw();
    });

    area.add_controller(click);
}

fn install_motion_controller(
    area: &gtk::DrawingArea,
    engine: &SharedPlotEngine,
    pointer: &Rc<Cell<(f64, f64)>>,
) {
    let motion = gtk::EventControllerMotion::new();

    let move_engine = Rc::clone(engine);
    let move_area = area.clone();
    let move_pointer = Rc::clone(pointer);
    motion.connect_motion(move |_, x, y| {
        move_pointer.set((x, y));
        move_engine.borrow_mut().pointer_move(x, y);
        move_area.queue_draw();
    });

    let leave_engine = Rc::clone(engine);
    let leave_area = area.clone();
    motion.connect_leave(move |_| {
        leave_engine.borrow_mut().pointer_leave();
        leave_area.queue_draw();
    });

    area.add_controller(motion);
}

fn install_scroll_controller(
    area: &gtk::DrawingArea,
    engine: &SharedPlotEngine,
    pointer: &Rc<Cell<(f64, f64)>>,
) {
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);

    let engine = Rc::clone(engine);
    let scroll_area = area.clone();
    let pointer = Rc::clone(pointer);
    scroll.connect_scroll(move |_, _, delta_y| {
        let (x, y) = pointer.get();
        engine.borrow_mut().wheel(WheelEvent::new(delta_y, x, y));
        scroll_area.queue_draw();
        glib::Propagation::Stop
    });

    area.add_controller(scroll);
}

fn install_sync_tick(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let engine = Rc::clone(engine);
    area.add_tick_callback(move |area, _: &gdk::FrameClock| {
        if let Ok(mut engine) = engine.try_borrow_mut() {
            if engine.sync_cursor_from_peers() > 0 {
                area.queue_draw();
            }
        }
        glib::ControlFlow::Continue
    });
}
