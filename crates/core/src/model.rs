/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input, which lets front ends recompute freely on every change without
/// tracking what has already been evaluated.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Calls the model and captures the input alongside the output.
    ///
    /// # Errors
    ///
    /// Returns the model's error if the call fails.
    fn snapshot(
        &self,
        input: Self::Input,
    ) -> Result<Snapshot<Self::Input, Self::Output>, Self::Error> {
        let output = self.call(&input)?;
        Ok(Snapshot::new(input, output))
    }
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, num::ParseFloatError};

    use approx::assert_relative_eq;

    use super::*;

    /// Scales its input by a fixed factor.
    struct Scale(f64);

    impl Model for Scale {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            Ok(self.0 * input)
        }
    }

    /// Parses its input as a number.
    struct Parse;

    impl Model for Parse {
        type Input = String;
        type Output = f64;
        type Error = ParseFloatError;

        fn call(&self, input: &String) -> Result<f64, Self::Error> {
            input.trim().parse()
        }
    }

    #[test]
    fn snapshot_captures_input_and_output() {
        let snapshot = Scale(2.5).snapshot(4.0).unwrap();
        assert_relative_eq!(snapshot.input, 4.0);
        assert_relative_eq!(snapshot.output, 10.0);
    }

    #[test]
    fn snapshot_propagates_model_errors() {
        assert!(Parse.snapshot("twelve".to_string()).is_err());

        let snapshot = Parse.snapshot(" 12.5 ".to_string()).unwrap();
        assert_eq!(snapshot.input, " 12.5 ");
        assert_relative_eq!(snapshot.output, 12.5);
    }
}
