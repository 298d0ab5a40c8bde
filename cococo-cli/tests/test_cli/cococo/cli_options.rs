use crate::add_test;
use crate::common::{document, file_xml, Fixture};

const LISTING: &[(&str, &str)] = &[
    ("foo/bar/file1.swift", "1: 1\n"),
    ("asdf/foo.h", "2: 1\n"),
    ("asdf/foo.m", "3: 1\n"),
    ("asdf/bar.m", "4: 1\n"),
    ("file2.swift", "5: 0\n"),
];

// Exclude a single file extension
add_test!(excluded_file_extension, async {
    let fixture = Fixture::with_archive("Run.xcresult", LISTING);

    let output = fixture
        .run(&["-e", ".swift", &fixture.path("Run.xcresult")])
        .await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        document(&[
            file_xml("asdf/foo.h", &[(2, true)]),
            file_xml("asdf/foo.m", &[(3, true)]),
            file_xml("asdf/bar.m", &[(4, true)]),
        ])
    );
});

// Exclude several extensions, comma separated and repeated
add_test!(excluded_file_extensions_multiple, async {
    let fixture = Fixture::with_archive("Run.xcresult", LISTING);

    let output = fixture
        .run(&[
            "--excluded-file-extensions",
            ".m",
            "-e",
            ".h",
            &fixture.path("Run.xcresult"),
        ])
        .await;
    assert!(output.status.success());

    let delimited = fixture
        .run(&["-e", ".m,.h", &fixture.path("Run.xcresult")])
        .await;
    assert_eq!(output.stdout, delimited.stdout);
    assert_eq!(
        output.stdout,
        document(&[
            file_xml("foo/bar/file1.swift", &[(1, true)]),
            file_xml("file2.swift", &[(5, false)]),
        ])
    );
});

// Ignore files by path substring
add_test!(ignored_paths, async {
    let fixture = Fixture::with_archive("Run.xcresult", LISTING);

    let output = fixture
        .run(&["-i", "asdf/", "-i", "foo/bar", &fixture.path("Run.xcresult")])
        .await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        document(&[file_xml("file2.swift", &[(5, false)])])
    );
});

// Legacy archives need --legacy
add_test!(legacy_mode, async {
    let fixture = Fixture::with_archive("Run.xccovarchive", &[("Old.swift", "9: 3\n")]);
    fixture.make_legacy("Run.xccovarchive");
    let archive = fixture.path("Run.xccovarchive");

    let output = fixture.run(&[&archive]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("requires legacy mode"));

    let output = fixture.run(&["--legacy", &archive]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        document(&[file_xml("Old.swift", &[(9, true)])])
    );
});

// -q hides progress but keeps failures
add_test!(quiet_hides_progress, async {
    let fixture = Fixture::with_archive("Run.xcresult", &[("A.swift", "1: 1\n")]);
    fixture.set_listing("Run.xcresult", "A.swift\nGone.swift\n");

    let output = fixture.run(&["-q", &fixture.path("Run.xcresult")]).await;
    assert!(output.status.success());
    assert!(!output.stderr.contains("0/2 A.swift"));
    assert!(output.stderr.contains("Conversion failed for: Gone.swift"));
});

// -qq suppresses the error message but not the exit status
add_test!(double_quiet_suppresses_errors, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-qq", &fixture.path("Missing.xcresult")]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
});

// --verbose logs tool invocations
add_test!(verbose_logs_invocations, async {
    let fixture = Fixture::with_archive("Run.xcresult", &[("A.swift", "1: 1\n")]);

    let output = fixture.run(&["-v", &fixture.path("Run.xcresult")]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("running coverage tool"));
    assert!(output.stderr.contains("--file-list"));
});

// --xcrun takes precedence over the environment
add_test!(xcrun_flag_overrides_env, async {
    let fixture = Fixture::with_archive("Run.xcresult", &[("A.swift", "1: 1\n")]);
    let archive = fixture.path("Run.xcresult");
    let xcrun = fixture.xcrun();

    let output = fixture
        .run_with_env(
            &["--xcrun", &xcrun, &archive],
            &[("COCOCO_XCRUN", "/nonexistent/xcrun")],
        )
        .await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    let output = fixture
        .run_with_env(&[&archive], &[("COCOCO_XCRUN", "/nonexistent/xcrun")])
        .await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("/nonexistent/xcrun"));
});

// Help and version
add_test!(help_and_version, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("--excluded-file-extensions"));
    assert!(output.stdout.contains("--ignored-paths"));
    assert!(output.stdout.contains("--legacy"));

    let output = fixture.run(&["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("cococo "));
});

// Conflicting verbosity flags are rejected by the parser
add_test!(verbose_and_quiet_conflict, async {
    let fixture = Fixture::with_archive("Run.xcresult", &[("A.swift", "1: 1\n")]);

    let output = fixture
        .run(&["-v", "-q", &fixture.path("Run.xcresult")])
        .await;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
});
