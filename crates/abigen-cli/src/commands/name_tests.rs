use abigen_core::{Category, TypeRecord};

use super::CommandError;
use super::name::{NameArgs, render};
use crate::cli::OutputFormat;
use crate::palette::Palette;

fn args(record: TypeRecord, format: OutputFormat) -> NameArgs {
    NameArgs {
        record,
        format,
        palette: Palette::PLAIN,
    }
}

#[test]
fn text_output() {
    let record = TypeRecord::new("A.B", "C", 0, Category::Class);

    let res = render(&args(record, OutputFormat::Text)).unwrap();

    insta::assert_snapshot!(res, @r"
    A.B.C
      mangled  A_CB_CC
      nested   A__CB__CC
    ");
}

#[test]
fn text_output_generic() {
    let record = TypeRecord::new("A.B", "Map`2", 2, Category::Interface);

    let res = render(&args(record, OutputFormat::Text)).unwrap();

    insta::assert_snapshot!(res, @r"
    A.B.Map`2
      mangled  __FMap_2
      nested   __FMap_2
    ");
}

#[test]
fn json_output() {
    let record = TypeRecord::new("X", "Y", 0, Category::Delegate);

    let res = render(&args(record, OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&res).unwrap();

    assert_eq!(value["qualified"], "X.Y");
    assert_eq!(value["mangled"], "X_CIY");
    assert_eq!(value["mangled_nested"], "X__CIY");
}

#[test]
fn empty_namespace_is_an_error() {
    let record = TypeRecord::new("", "Y", 0, Category::Class);

    let err = render(&args(record, OutputFormat::Text)).unwrap_err();

    assert!(matches!(err, CommandError::Record(_)));
    assert_eq!(err.to_string(), "type `Y` has an empty namespace");
}
