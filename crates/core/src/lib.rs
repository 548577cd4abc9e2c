//! Fire simulation core - pure, deterministic, and testable
//!
//! This crate contains the scene model, the simulation rule and the mapping
//! from simulation state to rendered cells. It has **zero dependencies** on
//! terminals or I/O, making it:
//!
//! - **Deterministic**: the same seed replays the same fire
//! - **Testable**: every pass of a tick can be driven with scripted randomness
//! - **Fast**: ticks and renders reuse their buffers and never allocate
//!
//! # Module Structure
//!
//! - [`scene`]: display grid + heat grid, and seeding them from input text
//! - [`sim`]: the three-pass tick (propagate, burn, refresh source)
//! - [`frame`]: heat/glyph to `(char, ColorTier)` mapping
//! - [`rng`]: uniform sample sources (seeded LCG and scripted)
//!
//! # Example
//!
//! ```
//! use textburn_core::{sim, Frame, Scene, SimpleRng};
//! use textburn_types::{Dims, FireParams};
//!
//! let mut scene = Scene::new(Dims::new(10, 40), "HELLO");
//! let params = FireParams::default();
//! let mut rng = SimpleRng::new(42);
//!
//! for _ in 0..50 {
//!     sim::tick(&mut scene, &params, &mut rng);
//! }
//!
//! let frame = Frame::from_scene(&scene);
//! assert_eq!(frame.dims(), scene.dims());
//! assert!(scene.heat_grid().iter().all(|h| (0.0..=1.0).contains(h)));
//! ```

pub mod frame;
pub mod rng;
pub mod scene;
pub mod sim;

pub use textburn_types as types;

// Re-export commonly used types for convenience
pub use frame::{fire_glyph, render_into, Frame, Glyph};
pub use rng::{ScriptedRng, SimpleRng, UniformSource};
pub use scene::Scene;
pub use sim::{tick, TickReport};
