//! Print the radius → minimal term count table for the default geometry.
//!
//! Also prints, per radius, how close the first reaching run actually got,
//! which is handy when picking fixtures.

use ufo::api::{bearing, default_radii, run, sweep, SearchCfg, SimCfg};

fn main() {
    let cfg = SimCfg::default();
    let theta = bearing(cfg.start, cfg.end);
    println!("bearing={theta:.12}");
    println!("Radius,MinPrecision,Steps,MissDistance");
    for rec in sweep(&cfg, SearchCfg::default(), &default_radii()) {
        let out = run(&cfg, theta, rec.min_precision, rec.radius);
        let miss = (cfg.end - out.position).norm();
        println!(
            "{},{},{},{miss:.6}{}",
            rec.radius,
            rec.min_precision,
            out.steps,
            if rec.saturated { " (saturated)" } else { "" }
        );
    }
}
