// crates/licnorm-core/src/rules/defaults.rs
//
// Header rules for bundles that carry TensorFlow.js-style license blocks.
// Order matters: the header rules need the `/**` opener that doc-opener
// rewrites, so they must run first.

use crate::error::Result;
use crate::rules::rule::Rule;

pub const APACHE_HEADER: &str = "apache-header";
pub const MIT_HEADER: &str = "mit-header";
pub const DOC_OPENER: &str = "doc-opener";
pub const CLOSER_QUOTE: &str = "closer-quote";

// Holder is lazy so a trailing "All Rights Reserved." lands in `rights`.
// The `Licensed` line's remainder counts as the first of the 12..=14 lines.
const APACHE_PATTERN: &str = concat!(
    r"^/\*\*\n",
    r" \* @license\n",
    r" \* Copyright (?P<year>[0-9]{4}) (?P<holder>.+?)(?: (?P<rights>All Rights Reserved\.))?\n",
    r" \* Licensed under the Apache License, Version 2\.0 (?:.+\n){12,14}",
    r" \*/",
);
const APACHE_TEMPLATE: &str = "/* @license Apache 2.0 - (c) ${holder} ${year} ${rights} */";

const MIT_PATTERN: &str = concat!(
    r"^/\*\*\n",
    r" \* @license\n",
    r" \* Copyright (?P<year>[0-9]{4}) (?P<holder>.+)\n",
    r" \*\n",
    r" \* Use of this source code is governed by an MIT-style\n",
    r" \* license that can be found in the LICENSE file or at\n",
    r" \* https://opensource\.org/licenses/MIT\.\n",
    r" \* =+\n",
    r" \*/",
);
const MIT_TEMPLATE: &str = "/* @license MIT - (c) ${holder} ${year} */";

// Exactly two stars: `/***` banners and the empty `/**/` comment stay as-is,
// so not every remaining `/**` prefix is rewritten. Stripping one star from
// `/***` would leave a `/**` for the next run to rewrite again.
const DOC_OPENER_PATTERN: &str = r"^/\*\*(?P<next>[^*/]|$)";
const DOC_OPENER_TEMPLATE: &str = "/*${next}";

const CLOSER_QUOTE_PATTERN: &str = r#"\*/\n""#;
const CLOSER_QUOTE_TEMPLATE: &str = r#"*/""#;

/// The four rules applied to the bundle, in application order.
pub fn default_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new(APACHE_HEADER, APACHE_PATTERN, APACHE_TEMPLATE)?,
        Rule::new(MIT_HEADER, MIT_PATTERN, MIT_TEMPLATE)?,
        Rule::new(DOC_OPENER, DOC_OPENER_PATTERN, DOC_OPENER_TEMPLATE)?,
        Rule::new(CLOSER_QUOTE, CLOSER_QUOTE_PATTERN, CLOSER_QUOTE_TEMPLATE)?,
    ])
}
