//! Browser speech bridge.
//!
//! Wires `SpeechRecognition` (or the `webkit` prefixed constructor) and
//! `speechSynthesis` to the chat signal. Browser callbacks become
//! [`RecognitionEvent`] / [`SynthesisEvent`] values; [`run`] executes the
//! [`VoiceCommand`]s returned by state transitions. Outside the `csr` build
//! everything here is inert.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::voice::{VoiceCommand, VoiceState};

/// Probe the browser, hook up callbacks, and report what is supported.
pub fn install(chat: RwSignal<ChatState>) -> VoiceState {
    #[cfg(feature = "csr")]
    {
        browser::install(chat)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = chat;
        VoiceState::default()
    }
}

/// Execute commands in order.
pub fn run(commands: Vec<VoiceCommand>) {
    #[cfg(feature = "csr")]
    {
        browser::run(commands);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = commands;
    }
}

/// Read `text` aloud through the chat state's voice rules.
pub fn speak(chat: RwSignal<ChatState>, text: &str) {
    let commands = chat.try_update(|s| s.voice.speak(text)).unwrap_or_default();
    run(commands);
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use js_sys::{Array, Function, Reflect};
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

    use crate::state::chat::ChatState;
    use crate::state::voice::{
        RECOGNITION_LANG, RecognitionEvent, SynthesisEvent, VoiceCommand, VoiceState, join_transcripts,
    };

    struct Recognizer {
        handle: JsValue,
        _callbacks: Vec<Closure<dyn FnMut(JsValue)>>,
    }

    struct Speaker {
        synth: SpeechSynthesis,
        /// Bumped on every cancel/speak so late events from a replaced
        /// utterance are ignored.
        generation: Rc<Cell<u64>>,
    }

    struct Bridge {
        chat: RwSignal<ChatState>,
        recognizer: Option<Recognizer>,
        speaker: Option<Speaker>,
    }

    thread_local! {
        static BRIDGE: RefCell<Option<Bridge>> = const { RefCell::new(None) };
    }

    pub(super) fn install(chat: RwSignal<ChatState>) -> VoiceState {
        let Some(window) = web_sys::window() else {
            return VoiceState::default();
        };
        let recognizer = create_recognizer(&window, chat);
        let speaker = window
            .speech_synthesis()
            .ok()
            .map(|synth| Speaker { synth, generation: Rc::new(Cell::new(0)) });

        let voice = VoiceState::new(recognizer.is_some(), speaker.is_some());
        log::info!(
            "speech: recognition={} synthesis={}",
            voice.recognition_supported,
            voice.synthesis_supported
        );
        BRIDGE.with(|slot| *slot.borrow_mut() = Some(Bridge { chat, recognizer, speaker }));
        voice
    }

    pub(super) fn run(commands: Vec<VoiceCommand>) {
        BRIDGE.with(|slot| {
            let slot = slot.borrow();
            let Some(bridge) = slot.as_ref() else {
                return;
            };
            for command in commands {
                match command {
                    VoiceCommand::StartRecognition => {
                        if let Some(rec) = &bridge.recognizer {
                            call_method(&rec.handle, "start");
                        }
                    }
                    VoiceCommand::StopRecognition => {
                        if let Some(rec) = &bridge.recognizer {
                            call_method(&rec.handle, "stop");
                        }
                    }
                    VoiceCommand::CancelSpeech => {
                        if let Some(speaker) = &bridge.speaker {
                            speaker.generation.set(speaker.generation.get() + 1);
                            speaker.synth.cancel();
                        }
                    }
                    VoiceCommand::Speak(text) => {
                        if let Some(speaker) = &bridge.speaker {
                            speak(speaker, bridge.chat, &text);
                        }
                    }
                }
            }
        });
    }

    fn create_recognizer(window: &web_sys::Window, chat: RwSignal<ChatState>) -> Option<Recognizer> {
        let ctor = ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .find_map(|name| Reflect::get(window, &JsValue::from_str(name)).ok()?.dyn_into::<Function>().ok())?;
        let handle = Reflect::construct(&ctor, &Array::new()).ok()?;
        Reflect::set(&handle, &JsValue::from_str("continuous"), &JsValue::TRUE).ok()?;
        Reflect::set(&handle, &JsValue::from_str("interimResults"), &JsValue::TRUE).ok()?;
        Reflect::set(&handle, &JsValue::from_str("lang"), &JsValue::from_str(RECOGNITION_LANG)).ok()?;

        let callbacks = vec![
            attach(&handle, "onstart", move |_| {
                chat.update(|s| s.on_recognition(RecognitionEvent::Start));
            }),
            attach(&handle, "onresult", move |event| {
                let transcript = transcript_from_event(&event);
                chat.update(|s| s.on_recognition(RecognitionEvent::Result(transcript)));
            }),
            attach(&handle, "onerror", move |event| {
                let reason = Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                log::warn!("speech recognition error: {reason}");
                chat.update(|s| s.on_recognition(RecognitionEvent::Error(reason)));
            }),
            attach(&handle, "onend", move |_| {
                chat.update(|s| s.on_recognition(RecognitionEvent::End));
            }),
        ];
        Some(Recognizer { handle, _callbacks: callbacks })
    }

    fn speak(speaker: &Speaker, chat: RwSignal<ChatState>, text: &str) {
        let utterance = match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("speech synthesis unavailable: {e:?}");
                return;
            }
        };
        utterance.set_rate(1.0);
        utterance.set_pitch(1.0);
        utterance.set_volume(1.0);

        let generation = speaker.generation.get() + 1;
        speaker.generation.set(generation);
        let handler = |event: SynthesisEvent| {
            let current = Rc::clone(&speaker.generation);
            Closure::once_into_js(move |_: JsValue| {
                if current.get() == generation {
                    chat.update(|s| s.on_synthesis(event));
                }
            })
        };
        let on_start = handler(SynthesisEvent::Start);
        let on_end = handler(SynthesisEvent::End);
        let on_error = handler(SynthesisEvent::Error);
        utterance.set_onstart(Some(on_start.unchecked_ref()));
        utterance.set_onend(Some(on_end.unchecked_ref()));
        utterance.set_onerror(Some(on_error.unchecked_ref()));

        speaker.synth.speak(&utterance);
    }

    fn attach(target: &JsValue, name: &str, handler: impl FnMut(JsValue) + 'static) -> Closure<dyn FnMut(JsValue)> {
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        if Reflect::set(target, &JsValue::from_str(name), cb.as_ref()).is_err() {
            log::warn!("speech: could not attach {name}");
        }
        cb
    }

    fn call_method(target: &JsValue, name: &str) {
        let method = Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        if let Some(method) = method {
            if let Err(e) = method.call0(target) {
                log::warn!("speech recognition {name} failed: {e:?}");
            }
        }
    }

    /// `event.results[i][0].transcript` for every result, joined.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn transcript_from_event(event: &JsValue) -> String {
        let Ok(results) = Reflect::get(event, &JsValue::from_str("results")) else {
            return String::new();
        };
        let len = Reflect::get(&results, &JsValue::from_str("length"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
        join_transcripts((0..len).filter_map(|i| {
            let result = Reflect::get_u32(&results, i).ok()?;
            let best = Reflect::get_u32(&result, 0).ok()?;
            Reflect::get(&best, &JsValue::from_str("transcript")).ok()?.as_string()
        }))
    }
}
