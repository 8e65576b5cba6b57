// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// System verification test result labels.
//
// The pass label is 60x30mm and carries the device serial as a barcode.
// The fail label is 51x25mm with an inverted header and the failure reason.

use labelwerk_core::labels::{SvtNokLabel, SvtOkLabel};

use crate::builder::ZplBuilder;
use crate::layout::truncate;
use crate::program::LabelProgram;

const FAILURE_REASON_MAX: usize = 24;

pub fn render_ok(label: &SvtOkLabel) -> LabelProgram {
    let mut b = ZplBuilder::new();
    b.page(480, 240)
        .font(40)
        .text(20, 15, "SVT OK")
        .font(22);

    let rows = [
        ("Article", &label.sv_article_no),
        ("Serial", &label.serial_no),
        ("Firmware", &label.fw_version),
        ("Run Date", &label.run_date),
    ];
    for ((heading, value), y) in rows.iter().zip([70, 100, 130, 160]) {
        b.text(20, y, heading).text(150, y, value);
    }

    b.code128(20, 190, 40, &label.serial_no);
    b.finish()
}

pub fn render_nok(label: &SvtNokLabel) -> LabelProgram {
    let mut b = ZplBuilder::new();
    b.page(408, 200)
        .filled(10, 10, 388, 50)
        .font(40)
        .text_reversed(20, 16, "SVT NOK")
        .font(20);

    let rows = [
        ("Article", label.sv_article_no.as_str()),
        ("Serial", label.serial_no.as_str()),
        ("Firmware", label.fw_version.as_str()),
        ("Run Date", label.run_date.as_str()),
        ("Reason", truncate(&label.failure_reason, FAILURE_REASON_MAX)),
    ];
    for ((heading, value), y) in rows.iter().zip([70, 95, 120, 145, 170]) {
        b.text(15, y, heading).text(120, y, value);
    }

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> SvtOkLabel {
        SvtOkLabel {
            sv_article_no: "SV-1001".into(),
            serial_no: "FLX-000482".into(),
            fw_version: "2.3.1".into(),
            run_date: "2026-02-11".into(),
        }
    }

    fn nok() -> SvtNokLabel {
        SvtNokLabel {
            sv_article_no: "SV-1001".into(),
            serial_no: "FLX-000483".into(),
            fw_version: "2.3.1".into(),
            run_date: "2026-02-11".into(),
            failure_reason: "Insulation resistance below limit on phase L2".into(),
        }
    }

    #[test]
    fn pass_label_carries_serial_barcode() {
        let text = render_ok(&ok()).into_text();
        assert!(text.starts_with("^XA\n^PW480\n^LL240\n"));
        assert!(text.contains("^FO150,100^FDFLX-000482^FS"));
        assert!(text.contains("^FO20,190^BY2^BCN,40,N,N,N^FDFLX-000482^FS"));
    }

    #[test]
    fn fail_label_is_smaller_and_inverted() {
        let text = render_nok(&nok()).into_text();
        assert!(text.starts_with("^XA\n^PW408\n^LL200\n"));
        assert!(text.contains("^FO20,16^FR^FDSVT NOK^FS"));
        assert!(!text.contains("^BC"));
    }

    #[test]
    fn failure_reason_is_cut_to_fit() {
        let text = render_nok(&nok()).into_text();
        assert!(text.contains("^FO120,170^FDInsulation resistance be^FS"));
    }
}
