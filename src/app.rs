use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::error::{Result, SetupError};
use crate::render::draw;
use crate::simulation::Simulation;
use crate::target::InputMailbox;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SetupError::NoDocument)
}

/// Creates a viewport-sized canvas and appends it to `<body>`.
pub fn create_canvas(id: &str) -> Result<HtmlCanvasElement> {
    let window = window()?;
    let document = document()?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| SetupError::Dom("created element is not a canvas".into()))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.);
    let height = window.inner_height()?.as_f64().unwrap_or(0.);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_id(id);

    document
        .body()
        .ok_or(SetupError::NoBody)?
        .append_child(&canvas)?;
    Ok(canvas)
}

pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::CanvasNotFound(id.to_owned()))?
        .dyn_into()
        .map_err(|_| SetupError::CanvasNotFound(id.to_owned()))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| SetupError::ContextUnavailable)
}

/// Pointer moves and clicks on the canvas only ever write the mailbox.
pub fn wire_inputs(canvas: &HtmlCanvasElement, inputs: Rc<InputMailbox>) -> Result<()> {
    {
        let inputs = inputs.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            inputs.set_pointer(e.page_x() as f64, e.page_y() as f64);
        }));
        canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        let click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            inputs.toggle_click();
            log::debug!("pointer mode: {}", inputs.has_user_clicked());
        }));
        canvas.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    Ok(())
}

/// A simulation bound to the context it draws on.
pub struct Scene {
    pub sim: Simulation,
    ctx: CanvasRenderingContext2d,
}

impl Scene {
    pub fn new(sim: Simulation, ctx: CanvasRenderingContext2d) -> Self {
        Self { sim, ctx }
    }

    /// evolve, move, then draw; never interleaved with another tick.
    pub fn tick(&mut self) {
        self.sim.step();
        draw(&mut self.ctx, &self.sim);
    }
}

type FrameCallback = Closure<dyn FnMut()>;

fn request_animation_frame(f: &FrameCallback) -> Result<i32> {
    Ok(window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// One tick per animation frame. Each tick re-arms the next one after it
/// has drawn; stopping just skips the re-arm.
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    running: Rc<Cell<bool>>,
    armed: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(scene: Rc<RefCell<Scene>>) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(false));
        let armed = Rc::new(Cell::new(false));

        let f = callback.clone();
        let r = running.clone();
        let a = armed.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            a.set(false);
            if !r.get() {
                return;
            }

            scene.borrow_mut().tick();

            if let Some(next) = f.borrow().as_ref() {
                match request_animation_frame(next) {
                    Ok(_) => a.set(true),
                    Err(err) => {
                        log::error!("frame loop halted: {err}");
                        r.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            callback,
            running,
            armed,
        }
    }

    pub fn start(&self) -> Result<()> {
        self.running.set(true);
        if self.armed.get() {
            return Ok(());
        }
        if let Some(f) = self.callback.borrow().as_ref() {
            request_animation_frame(f)?;
            self.armed.set(true);
        }
        log::info!("frame loop started");
        Ok(())
    }

    pub fn stop(&self) {
        self.running.set(false);
        log::info!("frame loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}
