//! Boot sequence state machine.
//!
//! The boot animation is a fixed script of messages grouped into named
//! phases, each entry carrying its own reveal delay. The sequence never
//! sleeps: `advance` hands the caller the next entry and its delay, so the
//! REPL paces itself with real time while tests drain the script instantly.

use std::time::Duration;

/// Named phases of the boot script, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootPhase {
    /// Bootloader menu flash.
    Grub,
    /// Kernel message scroll.
    Kernel,
    /// Desktop loading banner.
    Loading,
    /// Script exhausted.
    Complete,
}

/// One line of the boot script.
#[derive(Debug, Clone, Copy)]
pub struct BootEntry {
    pub phase: BootPhase,
    pub message: &'static str,
    /// How long the caller should wait before showing this line.
    pub delay: Duration,
}

const fn grub(message: &'static str) -> BootEntry {
    BootEntry {
        phase: BootPhase::Grub,
        message,
        delay: Duration::from_millis(250),
    }
}

const fn kernel(message: &'static str) -> BootEntry {
    BootEntry {
        phase: BootPhase::Kernel,
        message,
        delay: Duration::from_millis(45),
    }
}

const fn loading(message: &'static str) -> BootEntry {
    BootEntry {
        phase: BootPhase::Loading,
        message,
        delay: Duration::from_millis(400),
    }
}

const SCRIPT: &[BootEntry] = &[
    grub("GNU GRUB  version 2.12"),
    grub("   Linux Aura OS 2.0.4 (kernel 6.8.0-31-generic)"),
    kernel("[    0.000000] Linux version 6.8.0-31-generic (buildd@lcy02-amd64-036) (gcc-13 (Ubuntu 13.2.0-23ubuntu4) 13.2.0)"),
    kernel("[    0.000000] Command line: BOOT_IMAGE=/vmlinuz-6.8.0-31-generic root=/dev/nvme0n1p2 ro quiet splash"),
    kernel("[    0.012345] CPU: Intel(R) Core(TM) i9-14900K @ 5.80GHz"),
    kernel("[    0.023456] ACPI: PCI Root Bridge [PCI0] (domain 0000 [bus 00-fe])"),
    kernel("[    0.045678] clocksource: tsc-early: mask: 0xffffffffffffffff max_cycles: 0x29c1ee5c4c6"),
    kernel("[    0.067890] Initializing cgroup subsys cpuset"),
    kernel("[    0.234567] Mount-cache hash table entries: 65536 (order: 7, 524288 bytes, linear)"),
    kernel("[    0.456789] smp: Bringing up secondary CPUs ..."),
    kernel("[    0.567890] smpboot: Total of 24 processors activated"),
    kernel("[    0.678901] devtmpfs: initialized"),
    kernel("[    0.890123] NET: Registered PF_NETLINK/PF_ROUTE protocol family"),
    kernel("[    1.234567] pci 0000:01:00.0: [10de:2684] type 00 class 0x030000 NVIDIA RTX 4090"),
    kernel("[    1.678901] EXT4-fs (nvme0n1p2): mounted filesystem with ordered data mode"),
    kernel("[    1.789012] systemd[1]: systemd 255 (255.4-1ubuntu8) running in system mode"),
    kernel("[    1.901234] systemd[1]: Hostname set to <linux-aura>."),
    kernel("[    2.123456] systemd[1]: Started NetworkManager."),
    kernel("[    2.234567] systemd[1]: Reached target Graphical Interface."),
    kernel("[    2.345678] systemd[1]: Starting Linux Aura Portfolio OS..."),
    loading(""),
    loading("Starting Linux Aura OS v2.0..."),
];

/// Cursor over the boot script.
#[derive(Debug, Default)]
pub struct BootSequence {
    cursor: usize,
}

impl BootSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase of the next entry, or `Complete` once the script is done.
    pub fn phase(&self) -> BootPhase {
        SCRIPT
            .get(self.cursor)
            .map(|e| e.phase)
            .unwrap_or(BootPhase::Complete)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= SCRIPT.len()
    }

    /// Yields the next entry of the script, or `None` once complete.
    pub fn advance(&mut self) -> Option<&'static BootEntry> {
        let entry = SCRIPT.get(self.cursor);
        if entry.is_some() {
            self.cursor += 1;
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_never_regress() {
        let mut seq = BootSequence::new();
        let mut last = BootPhase::Grub;
        while let Some(entry) = seq.advance() {
            assert!(entry.phase >= last);
            last = entry.phase;
        }
        assert_eq!(seq.phase(), BootPhase::Complete);
    }

    #[test]
    fn test_advance_terminates() {
        let mut seq = BootSequence::new();
        let mut lines = 0;
        while seq.advance().is_some() {
            lines += 1;
        }
        assert!(lines > 0);
        assert!(seq.is_complete());
        assert!(seq.advance().is_none());
    }

    #[test]
    fn test_script_starts_in_grub() {
        let seq = BootSequence::new();
        assert_eq!(seq.phase(), BootPhase::Grub);
        assert!(!seq.is_complete());
    }
}
