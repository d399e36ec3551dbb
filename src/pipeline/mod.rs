pub mod stage2_score;
pub mod stage3_profiles;
pub mod stage4_outrank;
pub mod stage5_classify;
pub mod stage6_report;
