//! Classical numerical methods over parsed [`equation::Equation`]s.
//! Every routine is pure: it takes an already-parsed equation plus
//! numeric parameters and returns the full iteration trace as data,
//! leaving all presentation to the caller.

mod roots;
pub use roots::{bisection, secant, BisectionStep, RootSearch, SecantStep};

mod interpolate;
pub use interpolate::{lagrange, lagrange_inverse, DividedDifferences};

mod integrate;
pub use integrate::Samples;

mod ode;
pub use ode::{euler, modified_euler, OdeStep};
