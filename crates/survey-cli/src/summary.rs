use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_core::{
    MODERATE_RISK_MAX, OCI_CUTOFF, STAI_FEMALE_CUTOFF, STAI_MALE_CUTOFF, low_risk_max,
};
use survey_model::{
    BaiLevel, Instrument, OciStatus, PhqSeverity, RiskTier, StaiLevel, SubstanceKind,
    SurveyScores,
};

use crate::types::{CategoryCount, RunResult};

/// Line printed after every successful run.
pub fn processed_line(respondents: usize) -> String {
    format!("Processed {respondents} respondents.")
}

/// Respondents per classification, instrument by instrument.
///
/// Every category is listed, including empty ones, except the `Unknown`
/// risk tier, which only appears when some respondent has it.
pub fn classification_counts(scores: &SurveyScores) -> Vec<CategoryCount> {
    let records = &scores.records;
    let mut counts = Vec::new();
    let mut push = |instrument: &str, category: &str, count: usize| {
        counts.push(CategoryCount {
            instrument: instrument.to_string(),
            category: category.to_string(),
            count,
        });
    };

    for level in PhqSeverity::ALL {
        let count = records.iter().filter(|r| r.phq_classification == level).count();
        push(Instrument::Phq.code(), level.as_str(), count);
    }
    for level in BaiLevel::ALL {
        let count = records.iter().filter(|r| r.bai_classification == level).count();
        push(Instrument::Bai.code(), level.as_str(), count);
    }
    for status in OciStatus::ALL {
        let count = records.iter().filter(|r| r.oci_classification == status).count();
        push(Instrument::Oci.code(), status.as_str(), count);
    }
    for level in StaiLevel::ALL {
        let count = records.iter().filter(|r| r.stai_classification == level).count();
        push(Instrument::Stai.code(), level.as_str(), count);
    }
    for substance in &scores.catalog {
        let instrument = format!("{} {}", Instrument::Assist.code(), substance.kind.as_str());
        for tier in RiskTier::ALL {
            let count = records
                .iter()
                .filter_map(|r| r.substance(substance.kind))
                .filter(|score| score.risk == tier)
                .count();
            if tier == RiskTier::Unknown && count == 0 {
                continue;
            }
            push(&instrument, tier.as_str(), count);
        }
    }
    counts
}

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    println!("{}", summary_table(&result.scores));
}

pub fn summary_table(scores: &SurveyScores) -> Table {
    let total = scores.len();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Instrument"),
        header_cell("Classification"),
        header_cell("Respondents"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut previous: Option<String> = None;
    for row in classification_counts(scores) {
        let instrument_cell = if previous.as_deref() == Some(row.instrument.as_str()) {
            Cell::new("")
        } else {
            Cell::new(&row.instrument)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        previous = Some(row.instrument.clone());
        table.add_row(vec![
            instrument_cell,
            Cell::new(&row.category),
            count_cell(row.count),
            share_cell(row.count, total),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Reference table of the scored instruments.
pub fn instruments_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Instrument", "Name", "Columns", "Item values", "Cut-offs"]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for instrument in Instrument::ALL {
        let scale = match instrument.item_scale() {
            Some(scale) => format!("{}-{}", scale.min, scale.max),
            None => "coded per question".to_string(),
        };
        table.add_row(vec![
            instrument.code().to_string(),
            instrument.name().to_string(),
            instrument.column_count().to_string(),
            scale,
            cutoffs(instrument),
        ]);
    }
    table
}

fn cutoffs(instrument: Instrument) -> String {
    match instrument {
        Instrument::Phq => "<5 minimal, <10 mild, <15 moderate, <20 moderately severe, \
                            otherwise severe"
            .to_string(),
        Instrument::Bai => "<=21 low, <=35 moderate, otherwise potentially concerning".to_string(),
        Instrument::Oci => format!(">={OCI_CUTOFF} has OCD"),
        Instrument::Stai => format!(
            "sex 2: >={STAI_FEMALE_CUTOFF} high; sex 1: >={STAI_MALE_CUTOFF} high; \
             sex 3: binary"
        ),
        Instrument::Bfi => "subscale means, 2 decimals".to_string(),
        Instrument::Assist => format!(
            "<={} (alcohol <={}) no intervention, <={MODERATE_RISK_MAX} brief, \
             otherwise intensive",
            low_risk_max(SubstanceKind::Tobacco),
            low_risk_max(SubstanceKind::Alcohol),
        ),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn share_cell(count: usize, total: usize) -> Cell {
    if total == 0 {
        return dim_cell("-");
    }
    let share = count as f64 * 100.0 / total as f64;
    if count > 0 {
        Cell::new(format!("{share:.1}%"))
    } else {
        dim_cell(format!("{share:.1}%"))
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
