//! Cross-version consistency and start-up race tests against the public API.

use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

use install_id::adapters::live::{FileStorage, LiveIdGenerator};
use install_id::adapters::memory::{MemoryStorage, SequenceIdGenerator};
use install_id::bindings::{
    Abi37DeviceInstallationUuidManager, Abi38DeviceInstallationUuidManager,
    Abi39DeviceInstallationUuidManager, ProtocolVersion,
};
use install_id::{Config, Durability, InstallationContext};

fn fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn abi_37_38_39_return_identical_bytes() {
    let dir = fresh_dir("install_id_it_identical");
    let ctx = InstallationContext::live(&Config::new(&dir));

    let v37 = ctx.abi37().device_installation_uuid();
    let v38 = ctx.abi38().device_installation_uuid();
    let v39 = ctx.abi39().installation_uuid();

    assert_eq!(v37.as_bytes(), v38.as_bytes());
    assert_eq!(v38.as_bytes(), v39.as_bytes());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn versioned_runtimes_starting_together_see_one_value() {
    const PER_VERSION: usize = 4;
    let storage = Arc::new(MemoryStorage::new());
    let gen = Arc::new(SequenceIdGenerator::new("race"));
    let ctx = InstallationContext::with_ports(
        Box::new(Arc::clone(&storage)),
        Box::new(Arc::clone(&gen)),
    );
    let barrier = Arc::new(Barrier::new(PER_VERSION * ProtocolVersion::ALL.len()));

    let handles: Vec<_> = ProtocolVersion::ALL
        .into_iter()
        .flat_map(|version| (0..PER_VERSION).map(move |_| version))
        .map(|version| {
            let binding = ctx.binding(version);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                binding.installation_id()
            })
        })
        .collect();
    let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(ids.iter().all(|id| id == "race-1"));
    assert_eq!(gen.issued(), 1);
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn separate_contexts_racing_on_one_directory_converge() {
    const CONTEXTS: usize = 8;
    let dir = fresh_dir("install_id_it_file_race");
    let barrier = Arc::new(Barrier::new(CONTEXTS));

    let handles: Vec<_> = (0..CONTEXTS)
        .map(|_| {
            let dir = dir.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Each context has its own store and lock, like separate processes.
                let ctx = InstallationContext::with_ports(
                    Box::new(FileStorage::new(dir)),
                    Box::new(LiveIdGenerator::new()),
                );
                barrier.wait();
                ctx.installation_id().as_str().to_string()
            })
        })
        .collect();
    let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(ids.iter().all(|id| id == &ids[0]));
    let record = std::fs::read_to_string(dir.join("installation_id")).unwrap();
    assert!(record.contains(&ids[0]));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn restart_over_same_directory_returns_same_id() {
    let dir = fresh_dir("install_id_it_restart");

    let first = InstallationContext::live(&Config::new(&dir)).abi37().device_installation_uuid();
    let second = InstallationContext::live(&Config::new(&dir)).abi39().installation_uuid();

    assert_eq!(first, second);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn outage_for_whole_process_yields_stable_ephemeral_id() {
    let ctx = InstallationContext::with_ports(
        Box::new(MemoryStorage::unavailable()),
        Box::new(LiveIdGenerator::new()),
    );

    let ids: Vec<String> = ctx.bindings().iter().map(|b| b.installation_id()).collect();

    assert_eq!(ids[0].len(), 36);
    assert!(ids.iter().all(|id| id == &ids[0]));
    assert_eq!(ctx.service().durability(), Some(Durability::Ephemeral));
}
