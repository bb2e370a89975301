//! JavaScript bindings. The generated glue owns the handle; calling
//! `free()` on the JS side drops the world.

use wasm_bindgen::prelude::*;

use crate::domain::{Seed, World};

#[wasm_bindgen]
pub struct WasmWorld {
    inner: World,
}

#[wasm_bindgen]
impl WasmWorld {
    /// A 64x64 world with the classic seed
    pub fn create() -> WasmWorld {
        WasmWorld { inner: World::default() }
    }

    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(width: u32, height: u32) -> Result<WasmWorld, JsError> {
        let inner = World::seeded(width, height, &Seed::Classic)?;
        Ok(WasmWorld { inner })
    }

    pub fn step(&mut self) {
        self.inner.step();
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation()
    }
}
