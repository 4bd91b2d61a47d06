//! Browser media plumbing: microphone capture and file reads.
//!
//! [`LiveCapture`] pairs a `getUserMedia` stream with its `MediaRecorder`
//! and the callbacks wired into it. It is the [`Microphone`] the
//! [`VoiceRecorder`] state machine owns while recording; releasing it stops
//! every track so the browser's recording indicator turns off.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobEvent, Event, MediaRecorder, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::consts::RECORDING_MIME;
use crate::error::{ClientError, describe_js};
use crate::net::channel::{ChannelSender, perform};
use crate::state::chat::ChatState;
use crate::state::recorder::{Finished, Microphone, RecorderCommand, RecorderPhase, VoiceRecorder};
use crate::util::data_uri;

pub type Recorder = VoiceRecorder<Blob, LiveCapture>;

/// Handles the voice button needs to drive one recording session.
#[derive(Clone, Copy)]
pub struct RecordingHandles {
    pub recorder: StoredValue<Recorder, LocalStorage>,
    pub phase: RwSignal<RecorderPhase>,
    pub chat: RwSignal<ChatState>,
}

pub struct LiveCapture {
    stream: MediaStream,
    recorder: MediaRecorder,
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut(Event)>,
}

impl LiveCapture {
    fn stop_recorder(&self) {
        if let Err(err) = self.recorder.stop() {
            log::warn!("media recorder stop failed: {}", describe_js(&err));
        }
    }
}

impl Microphone for LiveCapture {
    fn release(&mut self) {
        stop_tracks(&self.stream);
    }
}

/// Voice button clicked.
pub fn toggle_recording(handles: RecordingHandles, sender: ChannelSender) {
    let Some(command) = handles.recorder.try_update_value(VoiceRecorder::toggle) else {
        return;
    };
    handles.phase.set(handles.recorder.with_value(VoiceRecorder::phase));
    match command {
        RecorderCommand::Acquire => {
            leptos::task::spawn_local(async move {
                match open_capture(handles, sender.clone()).await {
                    Ok(capture) => {
                        let started = handles.recorder.try_update_value(|r| r.acquired(capture)).unwrap_or(false);
                        if started {
                            log::info!("voice recording started");
                        }
                    }
                    Err(err) => {
                        log::warn!("microphone unavailable: {err}");
                        handles.recorder.update_value(VoiceRecorder::denied);
                        perform(vec![ChatState::microphone_denied()], &sender);
                    }
                }
                handles.phase.set(handles.recorder.with_value(VoiceRecorder::phase));
            });
        }
        RecorderCommand::Stop => handles.recorder.with_value(|r| {
            if let Some(capture) = r.microphone() {
                capture.stop_recorder();
            }
        }),
        RecorderCommand::Ignore => {}
    }
}

async fn open_capture(handles: RecordingHandles, sender: ChannelSender) -> Result<LiveCapture, ClientError> {
    let devices = web_sys::window()
        .ok_or(ClientError::Unavailable("window"))?
        .navigator()
        .media_devices()
        .map_err(|_| ClientError::Unavailable("mediaDevices"))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&wasm_bindgen::JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| ClientError::Permission(describe_js(&e)))?;
    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| ClientError::Permission(describe_js(&e)))?
        .dyn_into()
        .map_err(|_| ClientError::Permission("getUserMedia returned no stream".to_owned()))?;

    let recorder = match MediaRecorder::new_with_media_stream(&stream) {
        Ok(recorder) => recorder,
        Err(err) => {
            stop_tracks(&stream);
            log::warn!("MediaRecorder rejected the stream: {}", describe_js(&err));
            return Err(ClientError::Unavailable("MediaRecorder"));
        }
    };

    let on_data = Closure::<dyn FnMut(BlobEvent)>::new(move |event: BlobEvent| {
        if let Some(blob) = event.data().filter(|b| b.size() > 0.0) {
            handles.recorder.update_value(|r| r.push_chunk(blob));
        }
    });
    let on_stop = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        finish_recording(handles, sender.clone());
    });
    recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
    recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));

    let capture = LiveCapture { stream, recorder, _on_data: on_data, _on_stop: on_stop };
    if let Err(err) = capture.recorder.start() {
        let mut capture = capture;
        capture.release();
        return Err(ClientError::Permission(describe_js(&err)));
    }
    Ok(capture)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// The recorder flushed its last chunk: encode and send the voice message.
fn finish_recording(handles: RecordingHandles, sender: ChannelSender) {
    let finished = handles.recorder.try_update_value(VoiceRecorder::finish).flatten();
    handles.phase.set(handles.recorder.with_value(VoiceRecorder::phase));
    let Some(Finished { chunks, microphone, interrupted }) = finished else {
        return;
    };
    // Runs after this callback returns; the capture owns the closure that
    // invoked us and must outlive it.
    leptos::task::spawn_local(async move {
        let _capture = microphone;
        if interrupted {
            log::warn!("voice recording ended unexpectedly after {} chunks", chunks.len());
            if chunks.is_empty() {
                return;
            }
        }
        let mime = chunks
            .first()
            .map(Blob::type_)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| RECORDING_MIME.to_owned());
        let mut bytes = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            match blob_bytes(chunk).await {
                Ok(data) => bytes.push(data),
                Err(err) => {
                    log::warn!("voice chunk unreadable: {err}");
                    return;
                }
            }
        }
        let uri = data_uri::encode_chunks(&mime, &bytes);
        let actions = handles.chat.with_untracked(|c| c.audio_actions(uri));
        perform(actions, &sender);
    });
}

/// Read a blob (or file) fully into memory.
pub async fn blob_bytes(blob: &Blob) -> Result<Vec<u8>, ClientError> {
    let buffer = JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| ClientError::Decode(describe_js(&e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Read a picked file as a data URI.
pub async fn read_file_data_uri(file: &web_sys::File) -> Result<String, ClientError> {
    let bytes = blob_bytes(file).await?;
    Ok(data_uri::encode(&file.type_(), &bytes))
}
