//! Tests mirroring `src/kernel`.

mod eval;
mod fold;
