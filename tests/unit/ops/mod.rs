//! Tests mirroring `src/ops`.
