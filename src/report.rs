//! End-to-end analysis pipeline and stdout report
//!
//! Runs the steps in fixed order: load and filter, pick the player with the
//! most seasons, per-season accuracy, trend fit with integration,
//! interpolation at the query years, then descriptive statistics and t-tests
//! over the FGM/FGA columns of the whole filtered table. One printed line per
//! computed quantity; diagnostics go to stderr via tracing, never stdout.

use std::path::Path;

use crate::descriptive::describe;
use crate::error::{Result, StatError};
use crate::hypothesis::{one_sample_ttest, paired_ttest, TTest};
use crate::interpolate::LinearInterpolator;
use crate::loader::{load_records, regular_season};
use crate::seasons::player_with_most_seasons;
use crate::shooting::{accuracy_series, season_accuracy};
use crate::trend::{compare_averages, LinearFit};

/// Run the whole analysis and print the report to stdout
pub fn run(data: &Path, estimate_years: &[i32]) -> Result<()> {
    let records = regular_season(load_records(data)?);
    if records.is_empty() {
        return Err(StatError::EmptyData("no regular-season rows in input"));
    }

    // Player with the most distinct regular seasons
    let (player, season_count) = player_with_most_seasons(&records)?;
    println!("Player with most regular seasons: {player}");
    println!("Number of seasons: {season_count}");

    // Per-season three-point accuracy for that player
    let lines = season_accuracy(&records, &player);
    for line in &lines {
        match line.accuracy {
            Some(accuracy) => println!(
                "Season: {}, Made: {}, Attempted: {}, Accuracy: {accuracy:.2}%",
                line.season, line.made, line.attempted
            ),
            None => println!(
                "Season: {}, Made: {}, Attempted: {}, Accuracy: N/A",
                line.season, line.made, line.attempted
            ),
        }
    }

    let (mut years, mut accuracies) = accuracy_series(&lines)?;
    sort_by_year(&mut years, &mut accuracies);

    // Trend line, averaged over the year range by exact integration
    let fit = LinearFit::fit(&years, &accuracies)?;
    tracing::debug!(slope = fit.slope, intercept = fit.intercept, "fitted trend");
    let trend = compare_averages(&fit, &years, &accuracies)?;
    println!("Average line fit: {}%", trend.fitted_average);
    println!("Actual average accuracy: {}%", trend.observed_average);
    println!("Difference: {}", trend.difference);

    // Interpolated estimates at the query years
    let interpolant = LinearInterpolator::new(&years, &accuracies)?;
    for &year in estimate_years {
        let estimate = interpolant.eval(f64::from(year))?;
        println!("Estimated {}-{} accuracy: {estimate:.2}%", year, year + 1);
    }

    // Field-goal columns over the whole filtered table
    let fgm: Vec<f64> = records.iter().map(|r| f64::from(r.fgm)).collect();
    let fga: Vec<f64> = records.iter().map(|r| f64::from(r.fga)).collect();

    for (name, column) in [("FGM", &fgm), ("FGA", &fga)] {
        let summary = describe(column)?;
        println!(
            "{name} - Mean: {}, Variance: {}, Skewness: {}, Kurtosis: {}",
            summary.mean, summary.variance, summary.skewness, summary.kurtosis
        );
    }

    let paired = paired_ttest(&fgm, &fga)?;
    println!(
        "Paired t-test: statistic = {}, p-value = {}",
        paired.statistic, paired.p_value
    );

    print_one_sample("FGM", one_sample_ttest(&fgm, 0.0)?);
    print_one_sample("FGA", one_sample_ttest(&fga, 0.0)?);

    Ok(())
}

/// Sort the parallel (year, accuracy) arrays ascending by year
///
/// The upstream grouping orders by season label; regression and integration
/// must not depend on that incidental order.
fn sort_by_year(years: &mut [i32], accuracies: &mut [f64]) {
    let mut order: Vec<usize> = (0..years.len()).collect();
    order.sort_by_key(|&i| years[i]);

    let sorted_years: Vec<i32> = order.iter().map(|&i| years[i]).collect();
    let sorted_accuracies: Vec<f64> = order.iter().map(|&i| accuracies[i]).collect();
    years.copy_from_slice(&sorted_years);
    accuracies.copy_from_slice(&sorted_accuracies);
}

fn print_one_sample(name: &str, test: TTest) {
    println!("\nOne-sample t-test ({name} vs 0):");
    println!("t-statistic: {:.4}", test.statistic);
    println!("p-value: {}", test.p_value);
}
