use super::{
    builders,
    rules::{Rule, RuleMatch},
    types::InlineNode,
};

/// Parses one raw line into a sequence of [`InlineNode`]s.
///
/// At each step every rule is searched in the remaining text and the match
/// starting earliest wins; on a tie the rule earlier in
/// [`Rule::PRECEDENCE`] wins. Text before the match becomes a `Text` node,
/// the match becomes one node, and scanning resumes after it. Unmatched
/// syntax is left as literal text, so parsing never fails.
///
/// `namespace` resolves titles that carry no namespace of their own.
pub fn parse_line(raw: &str, namespace: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut rest = raw;

    while !rest.is_empty() {
        let Some(m) = earliest_match(rest) else {
            out.push(InlineNode::text(rest));
            break;
        };
        if m.start > 0 {
            out.push(InlineNode::text(&rest[..m.start]));
        }
        let end = m.end;
        out.push(builders::build(m.capture, namespace));
        rest = &rest[end..];
    }

    out
}

/// The winning rule match for `s`, if any rule matches at all.
pub fn earliest_match(s: &str) -> Option<RuleMatch<'_>> {
    // min_by_key keeps the first of equal minima, i.e. the higher-precedence rule.
    Rule::PRECEDENCE
        .iter()
        .filter_map(|rule| rule.find(s))
        .min_by_key(|m| m.start)
}
