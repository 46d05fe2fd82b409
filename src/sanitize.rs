//! Region sanitizer.
//!
//! Excises navigation, page chrome and non-rendering elements from inside a
//! content region. Only descendants of the region root are touched; the root
//! itself and everything outside it stay as they are.

use tracing::debug;

use crate::page::ContentRegion;
use crate::selector::discard;

/// Remove every discardable descendant of the region.
///
/// Removal is destructive and unconditional. Emptying the region entirely is
/// allowed; a second call finds nothing left to remove.
#[must_use]
pub fn sanitize(region: ContentRegion<'_>) -> ContentRegion<'_> {
    let doomed = region.select(&discard::discard_group());
    let removed = doomed.length();
    if removed > 0 {
        doomed.remove();
    }
    debug!(selector = region.selector(), removed, "sanitized content region");
    region
}
