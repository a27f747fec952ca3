//! Saving the visible chart as SVG, PNG or Highcharts options.
//!
//! Browsers get a download; native builds write into the per-user data
//! directory under `exports/`.

use std::fmt;
use std::path::{Path, PathBuf};

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};

use super::{svg, ChartConfig};
use crate::t;

const EXPORT_WIDTH: u32 = 1200;
const EXPORT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Options,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Svg, Self::Png, Self::Options];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Options => "json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Options => "application/json",
        }
    }

    fn button_label(self) -> String {
        match self {
            Self::Svg => t!("export-svg"),
            Self::Png => t!("export-png"),
            Self::Options => t!("export-json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("couldn't serialize chart options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("couldn't rasterize chart: {0}")]
    Raster(String),

    #[error("couldn't save {file}: {reason}")]
    Save { file: String, reason: String },
}

/// Where a finished export went.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Downloaded(String),
    File(PathBuf),
}

impl fmt::Display for Saved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Saved::Downloaded(file) => write!(f, "download of {file}"),
            Saved::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// `tcpstats-rtt-both-20240305-140709.png`
pub fn file_name(stem: &str, format: ExportFormat, at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .unwrap_or_default();
    format!("{stem}-{stamp}.{}", format.extension())
}

pub async fn export(
    config: &ChartConfig,
    stem: &str,
    format: ExportFormat,
) -> Result<Saved, ExportError> {
    let bytes = match format {
        ExportFormat::Svg => svg::render_svg(config, EXPORT_WIDTH, EXPORT_HEIGHT).into_bytes(),
        ExportFormat::Png => {
            let markup = svg::render_svg(config, EXPORT_WIDTH, EXPORT_HEIGHT);
            rasterize(&markup).await?
        }
        ExportFormat::Options => serde_json::to_vec_pretty(config)?,
    };

    let file = file_name(stem, format, OffsetDateTime::now_utc());
    save(&file, format.mime(), bytes).await
}

#[component]
pub fn ChartExportPanel(config: ChartConfig, file_stem: String) -> Element {
    let pending = use_signal(|| None::<ExportFormat>);
    // Localized outcome of the last export.
    let outcome = use_signal(|| None::<Result<String, String>>);

    let feedback = match (pending(), outcome()) {
        (Some(format), _) => Some((
            "panel__meta",
            t!("export-working", format = format.extension().to_uppercase()),
        )),
        (None, Some(Ok(message))) => Some(("panel__meta panel__meta--success", message)),
        (None, Some(Err(message))) => Some(("panel__meta panel__meta--error", message)),
        (None, None) => None,
    };

    rsx! {
        section { class: "panel chart-export",
            div { class: "panel__header",
                h2 { {t!("export-title")} }
            }
            div { class: "chart-export__actions",
                for format in ExportFormat::ALL {
                    button {
                        key: "{format.extension()}",
                        r#type: "button",
                        class: if format == ExportFormat::Svg { "button button--primary" } else { "button button--ghost" },
                        disabled: pending().is_some(),
                        onclick: {
                            let config = config.clone();
                            let stem = file_stem.clone();
                            let mut pending = pending;
                            let mut outcome = outcome;
                            move |_: MouseEvent| {
                                if pending().is_some() {
                                    return;
                                }
                                pending.set(Some(format));
                                let config = config.clone();
                                let stem = stem.clone();
                                spawn(async move {
                                    let message = match export(&config, &stem, format).await {
                                        Ok(saved) => {
                                            info!(%saved, "chart exported");
                                            Ok(match saved {
                                                Saved::Downloaded(file) => t!("export-downloaded", file = file),
                                                Saved::File(path) => t!("export-saved", path = path.display().to_string()),
                                            })
                                        }
                                        Err(err) => {
                                            warn!("chart export failed: {err}");
                                            Err(t!("export-failed", reason = err.to_string()))
                                        }
                                    };
                                    outcome.set(Some(message));
                                    pending.set(None);
                                });
                            }
                        },
                        {format.button_label()}
                    }
                }
            }

            if let Some((class, message)) = feedback {
                p { class: "{class}", role: "status", "{message}" }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn save(file: &str, _mime: &str, bytes: Vec<u8>) -> Result<Saved, ExportError> {
    let dirs = directories::ProjectDirs::from("org", "TCPStats", "TCPStats").ok_or_else(|| {
        ExportError::Save {
            file: file.to_string(),
            reason: "no home directory".to_string(),
        }
    })?;
    write_into(&dirs.data_dir().join("exports"), file, &bytes).map(Saved::File)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_into(dir: &Path, file: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let failed = |err: std::io::Error| ExportError::Save {
        file: file.to_string(),
        reason: err.to_string(),
    };
    std::fs::create_dir_all(dir).map_err(failed)?;
    let path = dir.join(file);
    std::fs::write(&path, bytes).map_err(failed)?;
    Ok(path)
}

#[cfg(not(target_arch = "wasm32"))]
async fn rasterize(markup: &str) -> Result<Vec<u8>, ExportError> {
    rasterize_native(markup)
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_native(markup: &str) -> Result<Vec<u8>, ExportError> {
    let raster = |reason: String| ExportError::Raster(reason);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(markup, &options).map_err(|err| raster(err.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| raster(format!("empty {}x{} canvas", size.width(), size.height())))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|err| raster(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn save(file: &str, mime: &str, bytes: Vec<u8>) -> Result<Saved, ExportError> {
    browser::download(file, mime, &bytes).map_err(|reason| ExportError::Save {
        file: file.to_string(),
        reason,
    })?;
    Ok(Saved::Downloaded(file.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn rasterize(markup: &str) -> Result<Vec<u8>, ExportError> {
    browser::rasterize(markup, EXPORT_WIDTH, EXPORT_HEIGHT)
        .await
        .map_err(ExportError::Raster)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlAnchorElement,
        HtmlCanvasElement, HtmlImageElement, Url,
    };

    fn js_err(context: &str) -> impl Fn(JsValue) -> String + '_ {
        move |err| format!("{context}: {err:?}")
    }

    fn document() -> Result<Document, String> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "no document".to_string())
    }

    fn object_url(parts: &js_sys::Array, mime: &str, text: bool) -> Result<String, String> {
        let props = BlobPropertyBag::new();
        props.set_type(mime);
        let blob = if text {
            Blob::new_with_str_sequence_and_options(parts, &props)
        } else {
            Blob::new_with_u8_array_sequence_and_options(parts, &props)
        }
        .map_err(js_err("blob"))?;
        Url::create_object_url_with_blob(&blob).map_err(js_err("object url"))
    }

    pub fn download(file: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let url = object_url(&parts, mime, false)?;

        let clicked = document()?
            .create_element("a")
            .map_err(js_err("anchor"))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| "not an anchor".to_string())
            .map(|link| {
                link.set_href(&url);
                link.set_download(file);
                link.click();
            });

        let _ = Url::revoke_object_url(&url);
        clicked
    }

    pub async fn rasterize(markup: &str, width: u32, height: u32) -> Result<Vec<u8>, String> {
        use base64::Engine as _;

        let parts = js_sys::Array::of1(&JsValue::from_str(markup));
        let url = object_url(&parts, "image/svg+xml", true)?;
        let image = HtmlImageElement::new().map_err(js_err("image"))?;
        image.set_src(&url);
        let decoded = JsFuture::from(image.decode()).await;
        let _ = Url::revoke_object_url(&url);
        decoded.map_err(js_err("svg decode"))?;

        let canvas = document()?
            .create_element("canvas")
            .map_err(js_err("canvas"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "not a canvas".to_string())?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(js_err("2d context"))?
            .ok_or_else(|| "2d context unavailable".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context".to_string())?;
        context
            .draw_image_with_html_image_element(&image, 0.0, 0.0)
            .map_err(js_err("draw"))?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(js_err("encode"))?;
        let (_, payload) = data_url
            .split_once(',')
            .ok_or_else(|| "unexpected data URL".to_string())?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|err| err.to_string())
    }
}
