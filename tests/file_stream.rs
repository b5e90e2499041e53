use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};

use streamout::{
    Decoration, Error, LINE_ENDING, Output, PlatformFamily, Stream,
    StreamWriter, Verbosity,
};

#[test]
fn redirected_file_is_not_decorated_on_posix() {
    let mut file = tempfile::tempfile().unwrap();
    assert_eq!(file.is_tty(), Some(false));

    let env = [("ANSICON", "1")];
    let out = StreamWriter::with_env(
        &mut file,
        Verbosity::Normal,
        Decoration::Auto,
        PlatformFamily::Posix,
        &PairEnv(&env),
    )
    .unwrap();
    assert!(!out.is_decorated());
}

#[cfg(unix)]
#[test]
fn redirected_file_is_not_decorated_by_default() {
    let mut file = tempfile::tempfile().unwrap();
    let out = StreamWriter::new(&mut file).unwrap();
    assert!(!out.is_decorated());
}

#[test]
fn lines_land_on_disk_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.log");
    let mut file = File::create(&path).unwrap();
    {
        let mut out = StreamWriter::new(&mut file).unwrap();
        out.write_line("first").unwrap();
        out.write_line("first").unwrap();
        out.write("skipped", Verbosity::Verbose).unwrap();
        out.write("second", Verbosity::Quiet).unwrap();
    }
    let expected =
        format!("first{LINE_ENDING}first{LINE_ENDING}second{LINE_ENDING}");
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn writer_does_not_close_the_stream() {
    let mut file = tempfile::tempfile().unwrap();
    {
        let mut out = StreamWriter::new(&mut file).unwrap();
        out.write_line("from writer").unwrap();
    }
    file.write_all(b"after").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let contents = io::read_to_string(&mut file).unwrap();
    assert_eq!(contents, format!("from writer{LINE_ENDING}after"));
}

#[test]
fn read_only_file_fails_to_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readonly.log");
    fs::write(&path, b"").unwrap();
    let mut file = OpenOptions::new().read(true).open(&path).unwrap();

    let mut out = StreamWriter::new(&mut file).unwrap();
    let err = out.write_line("nope").unwrap_err();
    assert!(matches!(err, Error::WriteFailure(_)));
    drop(out);
    assert_eq!(fs::read(&path).unwrap(), b"");
}

#[test]
fn verbose_writer_emits_everything() {
    let mut buf = Vec::new();
    {
        let mut out = StreamWriter::with_options(
            &mut buf,
            Verbosity::Verbose,
            Decoration::Forced(true),
        )
        .unwrap();
        assert!(out.is_decorated());
        for level in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose]
        {
            assert!(out.write(&level.to_string(), level).unwrap());
        }
    }
    let expected = format!(
        "quiet{LINE_ENDING}normal{LINE_ENDING}verbose{LINE_ENDING}"
    );
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn sink_is_not_a_stream() {
    let mut sink = io::sink();
    let err = StreamWriter::with_options(
        &mut sink,
        Verbosity::Normal,
        Decoration::Forced(false),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument));
    assert_eq!(
        err.to_string(),
        "the stream writer needs a writable stream as its handle"
    );
}

struct PairEnv<'a>(&'a [(&'a str, &'a str)]);

impl streamout::Env for PairEnv<'_> {
    fn var_os(&self, key: &str) -> Option<std::ffi::OsString> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| std::ffi::OsString::from(*v))
    }
}
