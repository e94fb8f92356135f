//! Text and JSON rendering of calculator output.

use agcfo_core::calculations::CalculatorKind;
use agcfo_core::present::{render_block, DISCLAIMER};
use agcfo_core::CalculationOutput;

/// Labeled result block for a terminal, followed by the disclaimer.
pub fn text_report(output: &CalculationOutput) -> String {
    let lines = output.lines();
    let body = render_block(&lines)
        .lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n{}\n\n{}",
        output.kind().display_name(),
        body,
        DISCLAIMER
    )
}

/// Pretty JSON of the tagged result.
pub fn json_report(output: &CalculationOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}

/// Field table for `agcfo fields <calculator>`.
pub fn fields_report(kind: CalculatorKind) -> String {
    let mut out = format!("{} fields (* required)\n", kind.display_name());
    for field in kind.fields() {
        out.push_str(&format!(
            "  --{:<20} {}{} ({}), e.g. {}\n",
            field.flag(),
            field.label,
            if field.required { " *" } else { "" },
            field.unit,
            field.placeholder,
        ));
    }
    out.push('\n');
    out.push_str(DISCLAIMER);
    out
}
