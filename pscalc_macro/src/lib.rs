mod keyword_enum;

use keyword_enum::keyword_enum_inner;
use proc_macro::TokenStream;

/// Turns `Variant = "keyword"` pairs into a fieldless enum, along with
/// `ALL`, `keyword()`, and a `Display` impl that prints the keyword
#[proc_macro_attribute]
pub fn keyword_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    keyword_enum_inner(attr, item)
}
