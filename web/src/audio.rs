use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioContext, HtmlAudioElement, OscillatorType};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Cue {
    /// A card was flipped
    Click,
    /// A pair was matched
    Match,
}

impl Cue {
    const fn sample_url(self) -> &'static str {
        match self {
            Self::Click => "click.mp3",
            Self::Match => "match.mp3",
        }
    }

    const fn duration_secs(self) -> f64 {
        match self {
            Self::Click => 0.1,
            Self::Match => 0.3,
        }
    }

    /// Tone steps used when the sample is not available, `(frequency, offset)` pairs
    const fn tones(self) -> &'static [(f32, f64)] {
        match self {
            Self::Click => &[(800.0, 0.0)],
            Self::Match => &[(440.0, 0.0), (880.0, 0.1)],
        }
    }
}

/// Plays the two cues, from the bundled samples when they load and synthesized otherwise.
///
/// Nothing here is allowed to fail loudly, every error is logged and dropped.
pub(crate) struct AudioCues {
    click: Option<HtmlAudioElement>,
    matched: Option<HtmlAudioElement>,
    synth: Rc<Synth>,
}

impl AudioCues {
    pub(crate) fn new() -> Self {
        Self {
            click: Self::load_sample(Cue::Click),
            matched: Self::load_sample(Cue::Match),
            synth: Rc::default(),
        }
    }

    fn load_sample(cue: Cue) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(cue.sample_url()) {
            Ok(sample) => {
                sample.load();
                Some(sample)
            }
            Err(err) => {
                log::warn!("Could not create audio element for {:?}: {:?}", cue, err);
                None
            }
        }
    }

    fn sample(&self, cue: Cue) -> Option<&HtmlAudioElement> {
        match cue {
            Cue::Click => self.click.as_ref(),
            Cue::Match => self.matched.as_ref(),
        }
    }

    pub(crate) fn play(&self, cue: Cue) {
        // a sample that failed to load reports it through `error()`
        let Some(sample) = self.sample(cue).filter(|sample| sample.error().is_none()) else {
            self.synth.play(cue);
            return;
        };

        sample.set_current_time(0.0);
        match sample.play() {
            Ok(promise) => {
                let synth = Rc::clone(&self.synth);
                spawn_local(play_or_else(cue, promise, move || synth.play(cue)));
            }
            Err(err) => {
                log::warn!("Error playing {:?} sound: {:?}", cue, err);
                self.synth.play(cue);
            }
        }
    }
}

/// Waits on a sample's `play()` promise, a rejection (autoplay block, missing file) runs `fallback`
async fn play_or_else(cue: Cue, promise: Promise, fallback: impl FnOnce()) {
    if let Err(err) = JsFuture::from(promise).await {
        log::warn!("Error playing {:?} sound, synthesizing it: {:?}", cue, err);
        fallback();
    }
}

/// Web Audio tones, the context is created on first use and then reused
#[derive(Default)]
struct Synth {
    context: RefCell<Option<AudioContext>>,
}

impl Synth {
    fn play(&self, cue: Cue) {
        if let Err(err) = self.synthesize(cue) {
            log::warn!("Could not synthesize {:?} sound: {:?}", cue, err);
        }
    }

    fn context(&self) -> Result<AudioContext, JsValue> {
        let mut slot = self.context.borrow_mut();
        if let Some(context) = slot.as_ref() {
            return Ok(context.clone());
        }
        let context = AudioContext::new()?;
        *slot = Some(context.clone());
        Ok(context)
    }

    /// Short sine tone with an exponential fade
    fn synthesize(&self, cue: Cue) -> Result<(), JsValue> {
        let context = self.context()?;
        let now = context.current_time();
        let end = now + cue.duration_secs();

        let oscillator = context.create_oscillator()?;
        oscillator.set_type(OscillatorType::Sine);
        let frequency = oscillator.frequency();
        for &(hz, offset) in cue.tones() {
            frequency.set_value_at_time(hz, now + offset)?;
        }

        let gain = context.create_gain()?;
        gain.gain().set_value_at_time(0.5, now)?;
        gain.gain().exponential_ramp_to_value_at_time(0.01, end)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(end)?;
        Ok(())
    }
}
