//! Shared style tokens. Hoisted here so every screen references one
//! palette instead of repeating hex literals.

pub const BLUE_700: &str = "#1E40AF";
pub const BLUE_500: &str = "#3B82F6";
pub const BLUE_100: &str = "#DBEAFE";
pub const GREEN_600: &str = "#059669";
pub const GREEN_100: &str = "#D1FAE5";
pub const AMBER_500: &str = "#F59E0B";
pub const AMBER_100: &str = "#FEF3C7";
pub const RED_600: &str = "#DC2626";
pub const RED_100: &str = "#FEE2E2";
pub const PURPLE_500: &str = "#8B5CF6";
pub const GRAY_900: &str = "#111827";
pub const GRAY_500: &str = "#6B7280";
pub const GRAY_400: &str = "#9CA3AF";
pub const GRAY_200: &str = "#E5E7EB";
pub const GRAY_100: &str = "#F3F4F6";
pub const GRAY_50: &str = "#F9FAFB";
pub const WHITE: &str = "#FFFFFF";
