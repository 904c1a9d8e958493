//! Tests mirroring `src/tables`.
