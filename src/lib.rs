use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod app;
pub mod arm;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod simulation;
pub mod solver;
pub mod target;

pub use arm::{Arm, Particle};
pub use config::Config;
pub use error::SetupError;
pub use simulation::Simulation;
pub use target::{InputMailbox, Target};

use app::{FrameLoop, Scene};

pub const CANVAS_ID: &str = "ourCanvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen]
pub struct ArmsHandle {
    scene: Rc<RefCell<Scene>>,
    frames: FrameLoop,
    particles_buffer: Vec<f32>,
}

impl ArmsHandle {
    fn launch(canvas: HtmlCanvasElement) -> error::Result<ArmsHandle> {
        let ctx = app::context_2d(&canvas)?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        let mut rng = StdRng::from_entropy();
        let sim = Simulation::new(width, height, Config::default(), &mut rng)?;
        log::info!(
            "ik arms: {}x{} surface, {} arms, {} particles",
            width,
            height,
            sim.arms().len(),
            sim.particles_count()
        );

        app::wire_inputs(&canvas, sim.inputs())?;

        let scene = Rc::new(RefCell::new(Scene::new(sim, ctx)));
        let frames = FrameLoop::new(scene.clone());
        frames.start()?;

        Ok(ArmsHandle {
            scene,
            frames,
            particles_buffer: Vec::new(),
        })
    }
}

#[wasm_bindgen]
impl ArmsHandle {
    /// Full-viewport canvas appended to the page, already animating.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ArmsHandle, JsValue> {
        let canvas = app::create_canvas(CANVAS_ID)?;
        Ok(Self::launch(canvas)?)
    }

    /// Same as `new`, on a canvas that is already in the page.
    pub fn attach(canvas_id: &str) -> Result<ArmsHandle, JsValue> {
        let canvas = app::find_canvas(canvas_id)?;
        Ok(Self::launch(canvas)?)
    }

    pub fn start(&self) -> Result<(), JsValue> {
        Ok(self.frames.start()?)
    }

    pub fn stop(&self) {
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn step_count(&self) -> f64 {
        self.scene.borrow().sim.step_count() as f64
    }

    pub fn has_user_clicked(&self) -> bool {
        self.scene.borrow().sim.inputs().has_user_clicked()
    }

    pub fn get_constant(&self, name: &str) -> f32 {
        self.scene.borrow().sim.config().get_constant(name)
    }

    pub fn set_constant(&mut self, name: &str, value: f32) {
        if self.scene.borrow_mut().sim.config_mut().set_constant(name, value) {
            log::debug!("{name} = {value}");
        } else {
            log::warn!("ignoring unknown or fixed constant {name}");
        }
    }

    // Returns coordinates of particles, 2 floats per particle
    pub fn get_particles_buffer(&mut self) -> *const f32 {
        self.scene
            .borrow()
            .sim
            .fill_positions(&mut self.particles_buffer);
        self.particles_buffer.as_ptr()
    }

    // Copy of the same coordinates, for hosts that don't read wasm memory
    pub fn particles(&mut self) -> js_sys::Float32Array {
        self.scene
            .borrow()
            .sim
            .fill_positions(&mut self.particles_buffer);
        js_sys::Float32Array::from(&self.particles_buffer[..])
    }

    pub fn get_particles_count(&self) -> u32 {
        self.scene.borrow().sim.particles_count() as u32
    }
}
