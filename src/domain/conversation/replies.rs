//! Reply composition.
//!
//! All user-facing wording lives here. The rest of the core deals in
//! tagged values (`LookupOutcome`, `UserInput`) and never formats text.

use crate::domain::conversation::{OutboundReply, RESTART_PHRASE};
use crate::domain::curriculum::{Grade, LookupOutcome, Subject};
use crate::domain::foundation::UserId;
use crate::domain::schedule::AcademicWeek;

fn grade_options() -> Vec<String> {
    Grade::ALL.iter().map(|g| g.label().to_string()).collect()
}

fn subject_options() -> Vec<String> {
    Subject::ALL.iter().map(|s| s.label().to_string()).collect()
}

/// Greeting for a fresh or restarted session, prompting grade selection.
pub fn welcome(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "🎓 **MEB Kazanım Rehberi'ne Hoş Geldiniz!**\n\n\
         Haftalık MEB kazanımlarınızı kolayca görebilirsiniz.\n\n\
         📚 Önce sınıfınızı seçin:",
    )
    .with_suggestions(grade_options())
}

/// Confirmation of the grade choice, prompting subject selection.
pub fn grade_accepted(user_id: &UserId, grade: Grade) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        format!(
            "✅ {}. sınıf seçildi!\n\n📖 Şimdi branşınızı seçin:",
            grade.label()
        ),
    )
    .with_suggestions(subject_options())
}

/// Corrective guidance for an invalid token while a grade is expected.
pub fn grade_rejected(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "Lütfen geçerli bir sınıf seçin (9, 10, 11, 12)",
    )
    .with_suggestions(grade_options())
}

/// Corrective guidance for an invalid token while a subject is expected.
pub fn subject_rejected(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "Lütfen geçerli bir branş seçin (Biyoloji, Kimya, Fizik, Matematik)",
    )
    .with_suggestions(subject_options())
}

/// Guidance when a subject arrives before any grade was selected.
pub fn grade_required(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "Önce sınıfınızı seçmelisiniz. /start komutu ile başlayın.",
    )
}

/// Guidance when a week query arrives before both selections were made.
pub fn selection_required(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "Önce sınıf ve branşınızı seçmelisiniz. /start komutu ile başlayın.",
    )
}

/// Guidance when input arrives and no session exists at all.
pub fn start_required(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(user_id.clone(), "Başlamak için /start komutunu kullanın.")
}

/// Guidance after completion for input that is neither a restart nor a
/// week query.
pub fn completed_guidance(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        format!(
            "Yeni bir sınıf/branş için \"{}\" yazın veya /hafta <numara> komutunu kullanın.",
            RESTART_PHRASE
        ),
    )
    .with_suggestions(vec![RESTART_PHRASE.to_string()])
}

/// Usage guidance for an invalid, missing, or out-of-range week argument.
pub fn week_usage(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "Lütfen geçerli bir hafta numarası girin (1-40 arası).\nÖrnek: /hafta 5",
    )
}

/// Static help text.
pub fn help(user_id: &UserId) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        "🤖 **MEB Kazanım Rehberi Yardım**\n\n\
         📋 **Komutlar:**\n\
         • /start - Seçimleri başlat\n\
         • /help - Bu yardım mesajını göster\n\
         • /hafta <numara> - Belirli bir haftayı görüntüle\n\n\
         📚 **Nasıl Kullanılır:**\n\
         1. /start komutu ile başlayın\n\
         2. Sınıfınızı seçin (9, 10, 11, 12)\n\
         3. Branşınızı seçin (Biyoloji, Kimya, Fizik, Matematik)\n\
         4. Bu haftanın kazanımı otomatik olarak gösterilir\n\n\
         📅 **Hafta Hesaplama:**\n\
         Hafta numarası, eğitim yılının başlangıcı olan 15 Eylül baz alınarak hesaplanır.",
    )
}

/// Answer for the current-week path, completing the selection sequence.
///
/// Carries the week's calendar range and offers a restart for another
/// grade/subject combination.
pub fn current_week_answer(
    user_id: &UserId,
    grade: Grade,
    subject: Subject,
    week: &AcademicWeek,
    outcome: LookupOutcome<'_>,
) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        format!(
            "🗓️ **{}**\n📘 **{}. sınıf {} dersi, {}. hafta**\n➡️ {}\n\n\
             Başka bir sınıf/branş için tekrar başlamak ister misiniz?",
            week.range_label(),
            grade.label(),
            subject.label(),
            week.week_number(),
            render_objective(outcome, subject, grade),
        ),
    )
    .with_suggestions(vec![RESTART_PHRASE.to_string()])
}

/// Answer for an explicit week query against the stored selection.
pub fn specific_week_answer(
    user_id: &UserId,
    grade: Grade,
    subject: Subject,
    week: u8,
    outcome: LookupOutcome<'_>,
) -> OutboundReply {
    OutboundReply::new(
        user_id.clone(),
        format!(
            "📘 **{}. sınıf {} dersi, {}. hafta**\n➡️ {}",
            grade.label(),
            subject.label(),
            week,
            render_objective(outcome, subject, grade),
        ),
    )
}

/// Renders a lookup outcome into its Turkish display line.
pub fn render_objective(outcome: LookupOutcome<'_>, subject: Subject, grade: Grade) -> String {
    match outcome {
        LookupOutcome::Found(text) => text.to_string(),
        LookupOutcome::WeekMissing => format!(
            "Bu hafta için {} dersi kazanımı bulunamadı.",
            subject.label()
        ),
        LookupOutcome::SubjectGradeMissing => format!(
            "{} dersi için {}. sınıf kazanımları bulunamadı.",
            subject.label(),
            grade.label()
        ),
    }
}
