//! Boot sequence ordering and failure behavior

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use aprs_boot::{
    log_subscriber, run_boot_diagnostics, run_with, Allocator, AprsModule, BootConfig, BootError,
    FirmwareModule, SystemHeap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Load,
    Reclaim,
    FreeBytes,
}

type Log = Rc<RefCell<Vec<Call>>>;

struct MockModule {
    log: Log,
    fail: bool,
}

#[derive(Debug)]
struct LoadFailed;

impl fmt::Display for LoadFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("transceiver did not answer")
    }
}

impl std::error::Error for LoadFailed {}

impl FirmwareModule for MockModule {
    type Error = LoadFailed;

    fn name(&self) -> &str {
        "mock-firmware"
    }

    fn load(&mut self) -> Result<(), LoadFailed> {
        self.log.borrow_mut().push(Call::Load);
        if self.fail {
            Err(LoadFailed)
        } else {
            Ok(())
        }
    }
}

struct MockHeap {
    log: Log,
    free: usize,
}

impl Allocator for MockHeap {
    fn force_reclaim(&mut self) {
        self.log.borrow_mut().push(Call::Reclaim);
    }

    fn free_bytes(&self) -> usize {
        self.log.borrow_mut().push(Call::FreeBytes);
        self.free
    }
}

fn fixture(fail: bool) -> (Log, MockModule, MockHeap) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let module = MockModule { log: Rc::clone(&log), fail };
    let heap = MockHeap { log: Rc::clone(&log), free: 50000 };
    (log, module, heap)
}

#[test]
fn reports_free_heap_as_the_only_console_line() {
    let (_, mut module, mut heap) = fixture(false);
    let mut console = Vec::new();
    let config = BootConfig::default().with_label("Test heap free :");

    let report = run_boot_diagnostics(&mut module, &mut heap, &mut console, &config).unwrap();

    assert_eq!(report.free_bytes, 50000);
    let text = String::from_utf8(console).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(text, "Test heap free : 50000\n");
}

#[test]
fn steps_run_in_order() {
    let (log, mut module, mut heap) = fixture(false);
    let mut console = Vec::new();

    run_boot_diagnostics(&mut module, &mut heap, &mut console, &BootConfig::default()).unwrap();

    assert_eq!(*log.borrow(), vec![Call::Load, Call::Reclaim, Call::FreeBytes]);
}

#[test]
fn load_failure_touches_neither_allocator_nor_console() {
    let (log, mut module, mut heap) = fixture(true);
    let mut console = Vec::new();

    let config = BootConfig::default();
    let err = run_boot_diagnostics(&mut module, &mut heap, &mut console, &config).unwrap_err();

    match err {
        BootError::ModuleLoad { module, .. } => assert_eq!(module, "mock-firmware"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(*log.borrow(), vec![Call::Load]);
    assert!(console.is_empty());
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn load_failure_reaches_the_fault_log() {
    let log = CapturedLog::default();
    let sink = log.clone();
    let subscriber = log_subscriber(move || sink.clone());
    let (_, mut module, mut heap) = fixture(true);
    let mut console = Vec::new();

    let status = tracing::subscriber::with_default(subscriber, || {
        run_with(&mut module, &mut heap, &mut console, &BootConfig::default())
    });

    assert_eq!(status, 1);
    assert!(console.is_empty());
    let text = log.text();
    assert!(text.contains("boot halted"), "missing fault line in {text:?}");
    assert!(text.contains("mock-firmware"));
    assert!(text.contains("transceiver did not answer"));
}

#[test]
fn successful_boot_exits_zero() {
    let (_, mut module, mut heap) = fixture(false);
    let mut console = Vec::new();

    assert_eq!(run_with(&mut module, &mut heap, &mut console, &BootConfig::default()), 0);
    assert_eq!(String::from_utf8(console).unwrap().lines().count(), 1);
}

struct BrokenConsole;

impl io::Write for BrokenConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "uart gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn console_failure_is_surfaced() {
    let (_, mut module, mut heap) = fixture(false);

    let config = BootConfig::default();
    let err =
        run_boot_diagnostics(&mut module, &mut heap, &mut BrokenConsole, &config).unwrap_err();

    assert!(matches!(err, BootError::Console(_)));
}

#[cfg(feature = "platform-linux")]
#[test]
fn host_platform_boots() {
    let mut console = Vec::new();
    let config = BootConfig::default();

    let report =
        run_boot_diagnostics(&mut AprsModule, &mut SystemHeap, &mut console, &config).unwrap();

    let text = String::from_utf8(console).unwrap();
    assert_eq!(text, format!("{} {}\n", config.heap_label, report.free_bytes));
}
