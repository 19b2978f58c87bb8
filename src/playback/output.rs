/// A tone generator on one output pin, e.g. a PWM buzzer.
pub trait ToneOutput {
    /// Start (or retune) a square tone at `frequency_hz`.
    fn start_tone(&mut self, frequency_hz: u32);

    /// Silence the output. Must be safe to call when already stopped.
    fn stop_tone(&mut self);
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn start_tone(&mut self, frequency_hz: u32) {
        (**self).start_tone(frequency_hz)
    }

    fn stop_tone(&mut self) {
        (**self).stop_tone()
    }
}
