use super::args::CliArgs;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_manifest_is_required() {
    assert!(CliArgs::try_parse_from(["yuimod"]).is_err());
}

#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["yuimod", "modules.json"]).unwrap();
    assert_eq!(args.manifest, PathBuf::from("modules.json"));
    assert!(args.config.is_none());
    assert!(args.out_dir.is_none());
    assert!(args.version_marker.is_none());
    assert!(args.pretty.is_none());
}

#[test]
fn test_all_flags() {
    let args = CliArgs::try_parse_from([
        "yuimod",
        "modules.json",
        "-c",
        "build/yuimod.json",
        "-o",
        "dist",
        "--version-marker",
        "3.18.1",
        "--pretty",
        "false",
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("build/yuimod.json")));
    assert_eq!(args.out_dir, Some(PathBuf::from("dist")));
    assert_eq!(args.version_marker.as_deref(), Some("3.18.1"));
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn test_out_dir_camel_case_alias() {
    let args = CliArgs::try_parse_from(["yuimod", "modules.json", "--outDir", "dist"]).unwrap();
    assert_eq!(args.out_dir, Some(PathBuf::from("dist")));
}
