use digest::Digest;
use md5::Md5;
use std::string::ToString;

/// slash quoting for digest strings
pub trait QuoteForDigest {
    fn quote_for_digest(&self) -> String;
}

impl QuoteForDigest for &str {
    fn quote_for_digest(&self) -> String {
        self.to_string().quote_for_digest()
    }
}

impl QuoteForDigest for String {
    fn quote_for_digest(&self) -> String {
        self.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

/// Strip any leading/trailing characters from `quotes` off a header value.
pub fn shave<'a>(value: &'a str, quotes: &str) -> &'a str {
    value
        .trim_start_matches(|c| quotes.contains(c))
        .trim_end_matches(|c| quotes.contains(c))
}

/// MD5 of `data` as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    md5_hex_finish(Md5::new_with_prefix(data))
}

/// Finalize a streaming context to 32 lowercase hex characters.
pub fn md5_hex_finish(ctx: Md5) -> String {
    hex::encode(ctx.finalize())
}

/// Zero a secret in place before dropping it. The fill keeps the buffer
/// valid ASCII, so the `String` invariant holds.
pub fn wipe(secret: &mut String) {
    unsafe { secret.as_mut_vec() }.fill(0);
    secret.clear();
}
