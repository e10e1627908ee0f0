//! JavaScript entry points.

use jigsnap_app::{action::Action, state::Settings};
use jigsnap_core::{AttributeSource, PuzzleConfig, Size};
use log::LevelFilter;
use wasm_bindgen::{JsCast as _, prelude::*};
use web_sys::{DomStringMap, HtmlElement};

use crate::{console, controller::PuzzleController};

/// Id of the element carrying the puzzle's `data-*` attributes.
const CONFIG_ELEMENT_ID: &str = "puzzle-config";

struct Dataset(DomStringMap);

impl AttributeSource for Dataset {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get(name)
    }
}

#[wasm_bindgen(start)]
fn start() {
    console::install_panic_hook();
    console::init_logger(LevelFilter::Info).ok();
}

/// Puzzle parameters read from the page.
#[wasm_bindgen]
pub struct PageConfig {
    inner: PuzzleConfig,
}

#[wasm_bindgen]
impl PageConfig {
    /// Number of piece rows.
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u16 {
        self.inner.grid().rows()
    }

    /// Number of piece columns.
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u16 {
        self.inner.grid().cols()
    }

    /// Reference image file name.
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> String {
        self.inner.image().filename.clone()
    }
}

/// Reads the `#puzzle-config` element's data attributes.
#[wasm_bindgen(js_name = "readPageConfig")]
pub fn read_page_config() -> Result<PageConfig, JsError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsError::new("no document"))?;
    let element = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| JsError::new("missing #puzzle-config element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsError::new("#puzzle-config is not an HTML element"))?;
    let inner = PuzzleConfig::from_attributes(&Dataset(element.dataset()))?;
    Ok(PageConfig { inner })
}

/// One puzzle page: app state plus pending transitions.
///
/// Every mutating method commits immediately and returns the action effect;
/// animations are pulled separately with `drainTransitions`.
#[wasm_bindgen]
pub struct PuzzleHandle {
    controller: PuzzleController,
}

#[wasm_bindgen]
impl PuzzleHandle {
    /// `settings` may be `undefined` for defaults, or a partial settings object.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue, width: f64, height: f64) -> Result<PuzzleHandle, JsError> {
        let settings: Settings = if settings.is_undefined() || settings.is_null() {
            Settings::default()
        } else {
            serde_wasm_bindgen::from_value(settings)?
        };
        Ok(Self {
            controller: PuzzleController::new(settings, Size::new(width, height)),
        })
    }

    /// Opens a puzzle. Without a seed the tray order is random.
    pub fn open(&mut self, config: &PageConfig, seed: Option<u32>) -> Result<JsValue, JsError> {
        let seed = seed.map_or_else(random_seed, u64::from);
        let effect = self.controller.open(config.inner.clone(), seed)?;
        Ok(serde_wasm_bindgen::to_value(&effect)?)
    }

    #[wasm_bindgen(js_name = "dragStart")]
    pub fn drag_start(&mut self, piece: &str, grab_x: f64, grab_y: f64) -> Result<JsValue, JsError> {
        let effect = self.controller.drag_start(piece, grab_x, grab_y)?;
        Ok(serde_wasm_bindgen::to_value(&effect)?)
    }

    #[wasm_bindgen(js_name = "dragEnd")]
    pub fn drag_end(&mut self) -> Result<JsValue, JsError> {
        self.dispatch(Action::DragEnd)
    }

    #[wasm_bindgen(js_name = "dropOnSlot")]
    pub fn drop_on_slot(&mut self, slot: &str) -> Result<JsValue, JsError> {
        let effect = self.controller.drop_on_slot(slot)?;
        Ok(serde_wasm_bindgen::to_value(&effect)?)
    }

    #[wasm_bindgen(js_name = "dropOnTray")]
    pub fn drop_on_tray(&mut self) -> Result<JsValue, JsError> {
        self.dispatch(Action::DropOnTray)
    }

    /// Drop at page position `(px, py)` over a board at `(bx, by, bw, bh)`.
    #[wasm_bindgen(js_name = "dropAt")]
    pub fn drop_at(
        &mut self,
        px: f64,
        py: f64,
        bx: f64,
        by: f64,
        bw: f64,
        bh: f64,
    ) -> Result<JsValue, JsError> {
        let effect = self.controller.drop_at((px, py), (bx, by, bw, bh))?;
        Ok(serde_wasm_bindgen::to_value(&effect)?)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<JsValue, JsError> {
        self.dispatch(Action::Resize(Size::new(width, height)))
    }

    #[wasm_bindgen(js_name = "toggleCheatMode")]
    pub fn toggle_cheat_mode(&mut self) -> Result<JsValue, JsError> {
        self.dispatch(Action::ToggleCheatMode)
    }

    pub fn reload(&mut self) -> Result<JsValue, JsError> {
        self.dispatch(Action::Reload)
    }

    /// The view model of the current screen.
    pub fn view(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.controller.view())?)
    }

    #[wasm_bindgen(js_name = "drainTransitions")]
    pub fn drain_transitions(&mut self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(
            &self.controller.drain_transitions(),
        )?)
    }
}

impl PuzzleHandle {
    fn dispatch(&mut self, action: Action) -> Result<JsValue, JsError> {
        let effect = self.controller.dispatch(action)?;
        Ok(serde_wasm_bindgen::to_value(&effect)?)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u64
}
