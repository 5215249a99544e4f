#![no_std]
//! Purchase flows between the DAO and the marketplace contract, run together in
//! one environment.
