use web_sys as web;

use crate::constants::DEFAULT_GAIN;
use crate::dsp;
use moonrise_core::FFT_SIZE;

/// WebAudio chain backing the visualizer:
/// media element -> wave shaper -> analyser -> gain -> destination.
///
/// The shaper idles with no curve (identity) until distortion is
/// switched on. The analyser taps the signal after the shaper so the
/// bars react to what is actually heard.
pub struct AudioGraph {
    audio_ctx: web::AudioContext,
    element: web::HtmlAudioElement,
    shaper: web::WaveShaperNode,
    analyser: web::AnalyserNode,
    gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl AudioGraph {
    pub fn new(track_url: &str) -> Result<Self, ()> {
        let audio_ctx = web::AudioContext::new()
            .map_err(|e| {
                log::error!("AudioContext error: {:?}", e);
            })
            .map_err(|_| ())?;

        let element = web::HtmlAudioElement::new_with_src(track_url)
            .map_err(|e| {
                log::error!("HtmlAudioElement error: {:?}", e);
            })
            .map_err(|_| ())?;
        element.set_cross_origin(Some("anonymous"));

        let source = audio_ctx
            .create_media_element_source(&element)
            .map_err(|e| {
                log::error!("MediaElementSource error: {:?}", e);
            })
            .map_err(|_| ())?;

        let shaper = web::WaveShaperNode::new(&audio_ctx)
            .map_err(|e| {
                log::error!("WaveShaperNode error: {:?}", e);
            })
            .map_err(|_| ())?;

        let analyser = audio_ctx
            .create_analyser()
            .map_err(|e| {
                log::error!("AnalyserNode error: {:?}", e);
            })
            .map_err(|_| ())?;
        analyser.set_fft_size(FFT_SIZE);

        let gain = create_gain(&audio_ctx, DEFAULT_GAIN, "Master")?;

        // Route element -> shaper -> analyser -> gain -> speakers
        let _ = source.connect_with_audio_node(&shaper);
        let _ = shaper.connect_with_audio_node(&analyser);
        let _ = analyser.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&audio_ctx.destination());

        log::info!(
            "[audio] graph ready, fft {} -> {} bins",
            FFT_SIZE,
            analyser.frequency_bin_count()
        );

        Ok(Self {
            audio_ctx,
            element,
            shaper,
            analyser,
            gain,
        })
    }

    /// Autoplay policies leave the context suspended until a gesture.
    pub fn resume_if_suspended(&self) {
        if self.audio_ctx.state() == web::AudioContextState::Suspended {
            log::info!("[audio] resuming suspended context");
            let _ = self.audio_ctx.resume();
        }
    }

    pub fn play(&self) {
        let _ = self.element.play();
    }

    pub fn pause(&self) {
        let _ = self.element.pause();
    }

    /// Swap the element source. Playback stops until play is pressed.
    pub fn load_track(&self, url: &str) {
        log::info!("[audio] loading {}", url);
        self.element.set_src(url);
    }

    pub fn set_volume(&self, value: f32) {
        self.gain.gain().set_value(value);
    }

    pub fn set_distortion(&self, enabled: bool) {
        if enabled {
            let mut curve = dsp::distortion_curve(dsp::DISTORTION_SAMPLES, dsp::DISTORTION_K);
            #[allow(deprecated)]
            self.shaper.set_curve(Some(curve.as_mut_slice()));
        } else {
            #[allow(deprecated)]
            self.shaper.set_curve(None);
        }
        log::info!("[audio] distortion {}", if enabled { "on" } else { "off" });
    }

    pub fn analyser(&self) -> web::AnalyserNode {
        self.analyser.clone()
    }
}

/// Owns the analyser handle and the byte buffer the scene reads.
///
/// The buffer is sized once from the analyser's bin count and reused
/// every frame.
pub struct SpectrumSampler {
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl SpectrumSampler {
    pub fn new(analyser: web::AnalyserNode) -> Self {
        let len = analyser.frequency_bin_count() as usize;
        Self {
            analyser,
            bins: vec![0; len],
        }
    }

    /// Overwrite the buffer with the current per-bin magnitudes.
    pub fn sample(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        &self.bins
    }

    pub fn bins(&self) -> &[u8] {
        &self.bins
    }
}
