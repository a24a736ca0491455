//! Runtime key normalization.
//!
//! Target providers name runtimes in their own vocabulary (`and_chr`,
//! `ios_saf`, `op_mob`...). The compatibility dataset uses a different scheme
//! (`chrome_android`, `safari_ios`, `opera_android`...). Keys without an alias
//! pass through unchanged.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Provider runtime key -> dataset runtime key
    static ref RUNTIME_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ios_saf", "safari_ios");
        m.insert("and_chr", "chrome_android");
        m.insert("and_ff", "firefox_android");
        m.insert("and_qq", "qq_android");
        m.insert("and_uc", "uc_android");
        m.insert("android", "webview_android");
        m.insert("ie_mob", "ie");
        m.insert("op_mini", "opera_mini");
        m.insert("op_mob", "opera_android");
        m.insert("samsung", "samsunginternet_android");
        m
    };
}

/// Map a provider runtime key to the dataset's key
pub fn normalize_runtime_key(key: &str) -> &str {
    RUNTIME_ALIASES.get(key).copied().unwrap_or(key)
}
