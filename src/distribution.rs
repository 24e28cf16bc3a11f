//! Fitted score-distribution model: percentile and letter rank.
//!
//! The population density of final adjusted scores is approximated by a fixed
//! degree-20 polynomial over [0, 100]. A percentile is the share of the
//! distribution's mass at or below a score, obtained by trapezoidal
//! integration; the letter rank is a step function over the percentile.

use serde::Serialize;
use std::fmt;

/// Coefficients of the fitted density polynomial, lowest power first.
///
/// Opaque fit output; the rank thresholds are calibrated against this exact
/// curve, so the values are reproduced verbatim rather than re-derived.
const DISTRIBUTION_COEFFICIENTS: [f64; 21] = [
    0.030211826004335650547316660663454968016594648361206,
    0.013518574829454534230504123397841757408384044403194,
    -0.0093674692849267450679070398401925165012707211507788,
    0.0021659680488067420369504746920794127700710767347410,
    -0.00027898940306635343236880066067764022572265980454622,
    0.000023053889416584420159133707763337580849212295225800,
    -1.2965650651843637690227325338250341317695790824096e-6,
    5.0601287255789775418234906926694095432675192993297e-8,
    -1.3436511856543748062634214106789898378414857454583e-9,
    2.1754773033924342677430788722117185179858679870413e-11,
    -9.5537118135007520031556745915800938398789485350631e-14,
    -4.8830170654929876010800931090395724702494825537098e-15,
    1.3771659799247569255047169013659563043094492324512e-16,
    -1.7090617264269014104296368963230063678999264733767e-18,
    6.7480936402211126262053013723543231821994389999740e-21,
    1.2351753738877223217020259884651930061251013644236e-22,
    -2.4629444823606767373960585228699896712818695300858e-24,
    2.1872957757460025840209525820152268933218404347937e-26,
    -1.1258800720698931828716203974387697686569662945859e-28,
    3.2569863909040321972443819985850002388622535999350e-31,
    -4.1285411726670488194438240742597322709194044789584e-34,
];

/// Sub-interval count for both integrals. Must match between numerator and
/// denominator or the percentile loses determinism at the edges.
const INTEGRATION_STEPS: u32 = 1000;

/// Density at `x`: the fitted polynomial, floored at zero.
///
/// The fit dips slightly negative near the domain edges; negative density has
/// no meaning, so it is clamped rather than propagated.
pub fn density(x: f64) -> f64 {
    let mut result = 0.0;
    let mut power = 1.0;
    for coef in DISTRIBUTION_COEFFICIENTS {
        result += coef * power;
        power *= x;
    }
    result.max(0.0)
}

/// Composite trapezoidal rule over `[start, end]` with a fixed step count.
fn trapezoidal_area(start: f64, end: f64, steps: u32) -> f64 {
    let dx = (end - start) / steps as f64;
    let mut sum = density(start) / 2.0 + density(end) / 2.0;
    for i in 1..steps {
        sum += density(start + i as f64 * dx);
    }
    sum * dx
}

/// Percentile of `score` within the fitted distribution, as an integer in
/// [0, 100].
///
/// Scores outside [0, 100] are clamped before integrating; the engine never
/// produces them, but a defined answer beats an undefined one.
pub fn percentile(score: f64) -> u32 {
    let score = score.clamp(0.0, 100.0);

    let total_area = trapezoidal_area(0.0, 100.0, INTEGRATION_STEPS);
    if total_area <= 0.0 {
        // Unreachable with the fixed coefficient table, still guarded.
        return 0;
    }
    let area_below = trapezoidal_area(0.0, score, INTEGRATION_STEPS);

    ((area_below / total_area) * 100.0).round() as u32
}

/// Letter grade derived from the percentile ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Rank {
    /// Thresholds are inclusive lower bounds on the percentile.
    pub fn from_percentile(percentile: u32) -> Self {
        match percentile {
            95.. => Rank::S,
            80.. => Rank::A,
            60.. => Rank::B,
            40.. => Rank::C,
            20.. => Rank::D,
            _ => Rank::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
            Rank::F => "F",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank for an adjusted score.
pub fn rank(score: f64) -> Rank {
    Rank::from_percentile(percentile(score))
}
