#[macro_use]
extern crate approx;

mod custom_dispatch;
mod dispatch_table;
mod halfspace;
mod solver_agreement;
mod typed_bv_soundness;
