/// Leaky integrate-and-fire unit state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LifNeuron {
    pub membrane_potential: f32,
    pub should_spike: bool,
}

impl LifNeuron {
    /// One integration step.
    ///
    /// A unit that spiked on the previous step is reset instead of being
    /// tested against the threshold again.
    #[inline]
    pub fn update(&mut self, input_current: f32, beta: f32, threshold: f32) {
        self.membrane_potential = beta * self.membrane_potential + input_current;

        if self.should_spike {
            self.membrane_potential = 0.0;
            self.should_spike = false;
        } else if self.membrane_potential >= threshold {
            self.should_spike = true;
        }
    }

    #[inline]
    pub fn spike(&self) -> f32 {
        if self.should_spike { 1.0 } else { 0.0 }
    }
}
