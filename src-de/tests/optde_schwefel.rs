use evolve_de::{DEConfigBuilder, Strategy, Updating, differential_evolution};
use evolve_testfunctions::schwefel;

#[test]
fn test_de_schwefel_2d() {
    // Test 2D Schwefel with self-adaptive parameters
    let c2 = DEConfigBuilder::new()
        .seed(46)
        .maxiter(500)
        .popsize(50)
        .strategy(Strategy::Jde)
        .clip_to_bounds(true)
        .build()
        .expect("config");
    let report = differential_evolution(&schwefel, 2, (-500.0, 500.0), c2).expect("run");
    // the next-best basin sits around 118
    assert!(report.fun < 1.0, "schwefel 2d best {}", report.fun);
    for &xi in report.x.iter() {
        assert!((xi - 420.9687).abs() < 1.0);
    }
}

#[test]
fn test_de_schwefel_deferred_donors() {
    let c2 = DEConfigBuilder::new()
        .seed(47)
        .maxiter(500)
        .popsize(50)
        .strategy(Strategy::Jde)
        .updating(Updating::Deferred)
        .clip_to_bounds(true)
        .build()
        .expect("config");
    let report = differential_evolution(&schwefel, 2, (-500.0, 500.0), c2).expect("run");
    assert!(report.fun < 1.0, "schwefel 2d best {}", report.fun);
    assert!(report.fun >= 0.0);
    assert!(report.x.iter().all(|&xi| (-500.0..=500.0).contains(&xi)));
}

#[test]
fn test_de_schwefel_unclipped_leaves_the_box() {
    // without clipping bounds only shape the initial population; schwefel
    // keeps decreasing outside [-500, 500] so the search walks away
    let c2 = DEConfigBuilder::new()
        .seed(46)
        .maxiter(500)
        .popsize(50)
        .strategy(Strategy::Jde)
        .build()
        .expect("config");
    let report = differential_evolution(&schwefel, 2, (-500.0, 500.0), c2).expect("run");
    assert!(report.x.iter().any(|&xi| xi.abs() > 500.0), "best {:?} stayed in the box", report.x);
    assert!(report.fun < 0.0);
}

#[test]
fn test_de_schwefel_10d_improves() {
    let run = |maxiter| {
        let config = DEConfigBuilder::new()
            .seed(48)
            .maxiter(maxiter)
            .popsize(50)
            .clip_to_bounds(true)
            .build()
            .expect("config");
        differential_evolution(&schwefel, 10, (-500.0, 500.0), config).expect("run")
    };
    let start = run(0);
    let report = run(100);
    assert!(report.fun < start.fun);
    assert!(report.population.iter().all(|&g| (-500.0..=500.0).contains(&g)));
}
