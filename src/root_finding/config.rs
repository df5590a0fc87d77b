//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tol`      : step/width tolerance on x-values
//! ├ `epsilon`  : residual tolerance on |f(x)|
//! └ `max_iter` : iteration cap (optional)
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! `tol` may also be given as a decimal-places count `n`, interpreted
//! as `10^-n` (see the `set_decimals` setter on each method config).


pub const DEFAULT_TOL     : f64 = 1e-12;
pub const DEFAULT_EPSILON : f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tol: f64,
    epsilon: f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            epsilon  : DEFAULT_EPSILON,
            max_iter : None,
        }
    }

    // getters
    pub fn tol(&self)      -> f64 { self.tol }
    pub fn epsilon(&self)  -> f64 { self.epsilon }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tol      (&mut self, v: f64)   { self.tol      = v; }
    pub(crate) fn with_epsilon  (&mut self, v: f64)   { self.epsilon  = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTol { got: v }
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }
            /// Sets the step tolerance as a decimal-places count: `tol = 10^-n`.
            pub fn set_decimals(
                self, n: u32
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if n == 0 || n > 300 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidDecimals { got: n }
                    );
                }
                self.set_tol(10f64.powi(-(n as i32)))
            }
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidEpsilon { got: v }
                    );
                }
                self.common.with_epsilon(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
