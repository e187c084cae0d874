//! Materializes downloaded report bytes as a file on the user's device.

const DEFAULT_REPORT_NAME: &str = "reporte.csv";

/// Last segment of a server-side report path, used as the local filename.
pub fn file_name_from_path(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_REPORT_NAME,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_file(name: &str, bytes: &[u8]) -> anyhow::Result<()> {
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, HtmlAnchorElement, Url};

    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| anyhow!("failed to build blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object url: {:?}", e))?;

    // Synthetic anchor click drives the browser's download mechanism.
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {:?}", e))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(name: &str, bytes: &[u8]) -> anyhow::Result<()> {
    use anyhow::Context;

    let path = std::env::current_dir()
        .context("no working directory")?
        .join(name);
    std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("report saved to {}", path.display());
    Ok(())
}
