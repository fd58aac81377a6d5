use crate::core::{ClipHandle, SoundError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A buffer source routed to the destination; stopping it also disconnects it.
pub struct WebClip {
    source: web::AudioBufferSourceNode,
}

impl ClipHandle for WebClip {
    fn stop(&mut self) {
        // Throws if the clip already ended on its own; nothing to do then.
        if let Err(e) = self.source.stop() {
            log::debug!("[audio] stop on finished clip: {:?}", e);
        }
        _ = self.source.disconnect();
    }
}

pub fn create_context() -> anyhow::Result<web::AudioContext> {
    web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext error: {:?}", e))
}

#[inline]
pub fn is_suspended(audio_ctx: &web::AudioContext) -> bool {
    audio_ctx.state() == web::AudioContextState::Suspended
}

pub async fn resume(audio_ctx: &web::AudioContext) -> anyhow::Result<()> {
    let promise = audio_ctx
        .resume()
        .map_err(|e| anyhow::anyhow!("resume error: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("resume rejected: {:?}", e))?;
    Ok(())
}

/// Fetch and decode one clip.
pub async fn load_clip(
    audio_ctx: &web::AudioContext,
    path: &str,
) -> Result<web::AudioBuffer, SoundError> {
    let fetch_err = |reason: String| SoundError::Fetch {
        path: path.to_string(),
        reason,
    };
    let decode_err = |reason: String| SoundError::Decode {
        path: path.to_string(),
        reason,
    };

    let window = web::window().ok_or_else(|| fetch_err("no window".to_string()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| fetch_err(format!("not a Response: {:?}", e)))?;
    if !response.ok() {
        return Err(fetch_err(format!("HTTP {}", response.status())));
    }
    let body = response
        .array_buffer()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(body)
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| fetch_err(format!("not an ArrayBuffer: {:?}", e)))?;

    let decoding = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| decode_err(format!("{:?}", e)))?;
    JsFuture::from(decoding)
        .await
        .map_err(|e| decode_err(format!("{:?}", e)))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| decode_err(format!("not an AudioBuffer: {:?}", e)))
}

pub fn start_clip(
    audio_ctx: &web::AudioContext,
    buffer: &web::AudioBuffer,
) -> anyhow::Result<WebClip> {
    let source = audio_ctx
        .create_buffer_source()
        .map_err(|e| anyhow::anyhow!("BufferSource error: {:?}", e))?;
    source.set_buffer(Some(buffer));
    source
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect error: {:?}", e))?;
    source
        .start()
        .map_err(|e| anyhow::anyhow!("start error: {:?}", e))?;
    Ok(WebClip { source })
}
