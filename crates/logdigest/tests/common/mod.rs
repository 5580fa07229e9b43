#![allow(dead_code)]

/// The canonical 1 error + 6 info sample
pub const SAMPLE_LOG: &str =
    "ERROR disk full\nINFO ok\nINFO ok\nINFO ok\nINFO ok\nINFO ok\nINFO ok\n";

/// Kernel-style log with timestamps, hex ids and a repeating heartbeat
pub fn kernel_log(heartbeats: usize) -> String {
    let mut log = String::new();
    log.push_str("[    0.000000] Linux version 6.1.0\n");
    for i in 0..heartbeats {
        log.push_str(&format!(
            "[{:>5}.{:03}] watchdog: heartbeat from cpu 0x{:08x}\n",
            10 + i,
            (i * 13) % 1000,
            0xdead0000u32 + i as u32
        ));
    }
    log.push_str("[  900.100000] Out of memory: Kill process 4242 (java)\n");
    log.push_str("[  900.200000] EXT4-fs error: data loss suspected on sda1\n");
    log.push_str("[  901.000000] kernel BUG at mm/slub.c:379!\n");
    log.push_str("[  902.000000] nfs: server storage01 not responding, timeout\n");
    log
}

/// Roughly `len` characters of distinct application lines
pub fn large_app_log(len: usize) -> String {
    let mut log = String::with_capacity(len + 128);
    let mut i = 0usize;
    while log.len() < len {
        let line = match i % 50 {
            0 => format!("2024-03-01T10:{:02}:00Z ERROR request {} failed: upstream reset\n", i % 60, i),
            25 => format!("2024-03-01T10:{:02}:00Z WARN pool {} nearing capacity\n", i % 60, i),
            _ => format!("2024-03-01T10:{:02}:00Z INFO served request {} in {}ms\n", i % 60, i, i % 97),
        };
        log.push_str(&line);
        i += 1;
    }
    log
}
