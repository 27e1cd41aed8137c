use anyhow::anyhow;
use tasklist_core::input::Notifier;
use tasklist_core::store::KeyValueStore;
use tasklist_core::task::Theme;
use tasklist_core::theme::ThemeSurface;
use wasm_bindgen::JsValue;

const DARK_SCHEME_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// `window.localStorage`, looked up on
/// every access so a storage that
/// disappears mid-session degrades to
/// read/write errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(js_error)
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(js_error)
  }
}

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(js_error)?
    .ok_or_else(|| {
      anyhow!(
        "localStorage is unavailable"
      )
    })
}

fn js_error(value: JsValue) -> anyhow::Error {
  anyhow!("{value:?}")
}

pub fn prefers_dark() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
    })
    .map(|query| query.matches())
    .unwrap_or(false)
}

/// Applies the theme as `data-theme` on
/// the document root.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
  fn apply(&mut self, theme: Theme) {
    let root = web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .and_then(|document| {
        document.document_element()
      });

    if let Some(root) = root
      && let Err(error) = root
        .set_attribute(
          "data-theme",
          theme.storage_value()
        )
    {
      tracing::error!(
        ?error,
        "failed applying theme"
      );
    }
  }
}

pub struct BrowserAlert;

impl Notifier for BrowserAlert {
  fn alert(&mut self, message: &str) {
    gloo::dialogs::alert(message);
  }
}
