use crate::algorithm::Algorithm;

// Defaults for parameters
const ALGORITHM_DEFAULT: Algorithm = Algorithm::Prim;
const SOURCE_DEFAULT: usize = 1;

// Valid minimums/left bounds of parameters
const SOURCE_MINIMUM: usize = 1;

/// The run configuration of a minimum spanning tree computation.
/// Only use if you want a non-default algorithm or source vertex. Otherwise use `Mst::default()`
/// to instantiate the engine with default parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstParams {
    pub(crate) algorithm: Algorithm,
    pub(crate) source: usize,
}

/// Builder object to set custom parameters.
pub struct ParamBuilder {
    algorithm: Option<Algorithm>,
    source: Option<usize>,
}

impl MstParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder {
            algorithm: None,
            source: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn source(&self) -> usize {
        self.source
    }
}

impl ParamBuilder {

    /// Sets the algorithm used by `Mst::run`. Defaults to Prim.
    ///
    /// # Parameters
    /// * algorithm - the algorithm
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn algorithm(mut self, algorithm: Algorithm) -> ParamBuilder {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the vertex Prim's algorithm grows its tree from, by its 1-based name.
    /// Borůvka's algorithm ignores it. Defaults to 1.
    ///
    /// # Parameters
    /// * source - the name of the source vertex
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn source(mut self, source: usize) -> ParamBuilder {
        let valid_source = ParamBuilder::validate_input_left_bound(
            source, SOURCE_MINIMUM, "source");
        self.source = Some(valid_source);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> MstParams {
        MstParams {
            algorithm: self.algorithm.unwrap_or(ALGORITHM_DEFAULT),
            source: self.source.unwrap_or(SOURCE_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            println!(
                "MST_WARNING: {param} ({input_param}) cannot be lower \
                than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else {
            input_param
        }
    }
}
