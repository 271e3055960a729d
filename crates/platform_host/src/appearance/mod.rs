//! Appearance host contracts: the OS color-scheme preference and the document theme surface.

pub mod color_scheme;
pub mod surface;
