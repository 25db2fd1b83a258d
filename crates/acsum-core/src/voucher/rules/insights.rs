//! Rule-based annotations over the voucher text and its entries.

use crate::models::summary::LineEntry;

const ADVANCE_MARKER: &str = "ADV";
const INSTRUMENTATION_MARKER: &str = "Instrumentation";
const INPUT_VAT_MARKER: &str = "ภาษีซื้อ";
const ZERO_AMOUNT_MARKER: &str = "0.00";

/// A human-readable annotation on a summarized voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    /// Debit and credit totals match.
    Balanced,
    /// Debit and credit totals differ.
    Imbalanced,
    /// Voucher concerns an advance or expense reimbursement.
    Advance,
    /// Entries relate to instrumentation work.
    Instrumentation,
    /// No input VAT was recorded for this payment.
    NoInputVat,
}

impl Insight {
    /// Annotation text.
    pub fn message(&self) -> &'static str {
        match self {
            Insight::Balanced => "✅ บัญชีสมดุล เดบิตและเครดิตตรงกัน",
            Insight::Imbalanced => "⚠️ บัญชีไม่สมดุล กรุณาตรวจสอบ",
            Insight::Advance => "📌 รายการเกี่ยวกับการคืนเงินค่าใช้จ่ายส่วนเกิน (Advance)",
            Insight::Instrumentation => "🔧 เกี่ยวข้องกับงาน Instrumentation หลายโครงการ",
            Insight::NoInputVat => "🧾 ไม่มีการบันทึกภาษีซื้อในการชำระครั้งนี้",
        }
    }
}

/// Evaluate the insight rules in their fixed order.
///
/// Exactly one of `Balanced`/`Imbalanced` is always first; each remaining
/// rule contributes at most once.
pub fn generate_insights(text: &str, entries: &[LineEntry], balance_ok: bool) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.push(if balance_ok {
        Insight::Balanced
    } else {
        Insight::Imbalanced
    });

    if text.contains(ADVANCE_MARKER) {
        insights.push(Insight::Advance);
    }

    if entries.iter().any(|e| e.note.contains(INSTRUMENTATION_MARKER)) {
        insights.push(Insight::Instrumentation);
    }

    if text.contains(INPUT_VAT_MARKER) && text.contains(ZERO_AMOUNT_MARKER) {
        insights.push(Insight::NoInputVat);
    }

    insights
}
