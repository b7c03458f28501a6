use log::{LevelFilter, info, warn};
use real_bessel::*;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn init_logging() {
    let level = match std::env::var("RUST_LOG").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

fn main() {
    init_logging();
    let x = 2.5_f64;

    // -- Integer order --
    println!("=== Integer order (f64) ===");
    for n in 0..4 {
        let j = besselj(n, x).unwrap();
        let y = bessely(n, x).unwrap();
        let i = besseli(n, x).unwrap();
        let k = besselk(n, x).unwrap();
        println!("n = {n}: J = {j:.10}  Y = {y:.10}  I = {i:.10}  K = {k:.10}");
    }

    // -- Real order --
    println!("\n=== Real order ===");
    let nu = 1.0 / 3.0;
    let jy = bessel_jy(x, nu).unwrap();
    println!("J_{nu:.4}({x}) = {:.15}, Y = {:.15}", jy.j, jy.y);
    let w = jy.j * jy.yp - jy.jp * jy.y;
    println!("  Wronskian = {w:.15} (2/(pi x) = {:.15})", 2.0 / (std::f64::consts::PI * x));

    let ik = bessel_ik(x, nu).unwrap();
    println!("I_{nu:.4}({x}) = {:.15}, K = {:.15}", ik.i, ik.k);

    // -- Derived functions --
    println!("\n=== Airy functions ===");
    for &t in &[-2.0_f64, 0.0, 2.0] {
        let a = airy(t).unwrap();
        println!(
            "x = {t:5.1}: Ai = {:.12}  Bi = {:.12}  Ai' = {:.12}  Bi' = {:.12}",
            a.ai, a.bi, a.aip, a.bip
        );
    }

    println!("\n=== Spherical Bessel ===");
    let s = spherical_bessel(2, x).unwrap();
    println!("j_2({x}) = {:.15}, y_2({x}) = {:.15}", s.j, s.y);

    println!("\n=== Struve ===");
    println!("H_0({x}) = {:.9}, H_1({x}) = {:.9}", struve_h0(x), struve_h1(x));

    // -- Chebyshev approximation --
    println!("\n=== Chebyshev fit of exp on (0, 1) ===");
    let series = ChebyshevSeries::fit(0.0, 1.0, MIN_FIT_DEGREE, f64::exp).unwrap();
    for m in [4, 8, 12] {
        let v = series.evaluate(m, 0.5).unwrap();
        println!("  {m:2} terms: {v:.15}  error = {:.2e}", (v - 0.5_f64.exp()).abs());
    }

    // -- Errors --
    println!("\n=== Errors ===");
    match bessely(2, -1.0_f64) {
        Ok(v) => println!("Y_2(-1) = {v}"),
        Err(e) => warn!("Y_2(-1): {e}"),
    }
    match bessel_jy(1.0e-3_f64, 200.5) {
        Ok(v) => println!("Y_200.5(1e-3) = {}", v.y),
        Err(e) => warn!("Y_200.5(1e-3): {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let j32 = bessel_jy(2.5_f32, 0.5).unwrap();
    println!("J_0.5(2.5) = {} (f32)", j32.j);

    info!("done");
}
