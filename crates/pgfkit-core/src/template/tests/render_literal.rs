//! Literal text tests: LaTeX that must survive parsing untouched

use super::helpers::filled_regions;
use super::*;

#[test]
fn test_render_double_dollar_is_literal_dollar() {
    let template = Template::parse("Cost: $$5 $$footer");
    assert_eq!(template.render(&filled_regions()), "Cost: $5 $footer");
}

#[test]
fn test_line_break_before_placeholder_is_kept() {
    let template = Template::parse(r"\node {first\\${footer}};");
    let mut regions = RegionMap::new();
    regions.append(Region::Footer, "second");
    assert_eq!(template.render(&regions), r"\node {first\\second};");
}

#[test]
fn test_doubled_braces_are_plain_text() {
    let template = Template::parse("\\pgfplotsset{every axis/.style={{font=\\small}}}\n$_contents");
    assert_eq!(template.regions().collect::<Vec<_>>(), [Region::Contents]);
    assert_eq!(
        template.render(&filled_regions()),
        "\\pgfplotsset{every axis/.style={{font=\\small}}}\n\\addplot+"
    );
}

#[test]
fn test_inline_math_is_plain_text() {
    let template = Template::parse(r"\node {$x^2$ and ${}^{14}$C};");
    assert_eq!(template.regions().count(), 0);
    assert_eq!(
        template.render(&filled_regions()),
        r"\node {$x^2$ and ${}^{14}$C};"
    );
}

#[test]
fn test_unknown_names_are_plain_text() {
    let template = Template::parse("${legend} $footers ${footer}s ${foot");
    assert_eq!(template.render(&filled_regions()), "${legend} $footers % footers ${foot");
}

#[test]
fn test_backslashes_elsewhere_are_untouched() {
    let template = Template::parse(r"\begin{axis}\\ $footer \end{axis}");
    assert_eq!(
        template.render(&filled_regions()),
        r"\begin{axis}\\ % footer \end{axis}"
    );
}
