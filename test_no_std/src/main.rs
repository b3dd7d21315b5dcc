//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use polyinterp::{approx::interpolate_windowed, lagrange, Lagrange, LagrangeInterpolator, Linear};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    let ys = [0.0_f64, 0.0, 1.0, 1.0, 2.0, 4.0, 3.0, 9.0];

    let mut out = [0.0; 2];

    lagrange::interpolate(1.5, &xs, &ys, 2, &mut out).unwrap();
    interpolate_windowed::<_, Lagrange>(2.5, &xs, &ys, 2, 2, &mut out).unwrap();
    interpolate_windowed::<_, Linear>(2.5, &xs, &ys, 2, 1, &mut out).unwrap();

    let interpolator = LagrangeInterpolator::new(&xs, &ys, 2).unwrap();
    let _: [f64; 2] = interpolator.interp_fixed(0.5).unwrap();

    loop {} // We don't actually run this, just compile it
}
