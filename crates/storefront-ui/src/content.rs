//! Literal footer content
//!
//! All copy and link targets the footer shows, kept as static data so the
//! component only lays it out. List order is meaningful: the first entry of
//! each section is its primary link.

use crate::brand::SizeVariant;
use crate::components::icon::IconKind;
use crate::navigation::NavigationTarget;
use crate::theme::ColorToken;

/// One entry of a footer link list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: NavigationTarget,
}

/// A headed list of links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

impl FooterSection {
    pub fn labels(&self) -> Vec<&'static str> {
        self.links.iter().map(|link| link.label).collect()
    }
}

/// Icon plus text line of the contact block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLine {
    pub icon: IconKind,
    pub text: &'static str,
}

/// External social profile link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub target: NavigationTarget,
    pub color: ColorToken,
}

/// Payment or trust badge image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub alt: &'static str,
    pub src: &'static str,
    pub height_px: u16,
}

/// Newsletter sign-up copy; the form itself is inert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Newsletter {
    pub heading: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

/// Everything the footer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    pub logo_size: SizeVariant,
    pub copyright: &'static str,
    pub contact: &'static [ContactLine],
    pub social: &'static [SocialLink],
    pub sections: &'static [FooterSection],
    pub newsletter: Newsletter,
    pub payment_badges: &'static [Badge],
    pub tagline: &'static str,
    pub registration: &'static str,
    pub trust_badges: &'static [Badge],
}

const fn link(label: &'static str, path: &'static str) -> FooterLink {
    FooterLink {
        label,
        target: NavigationTarget::from_static(path),
    }
}

const fn payment_badge(alt: &'static str, src: &'static str) -> Badge {
    Badge {
        alt,
        src,
        height_px: 30,
    }
}

const fn trust_badge(alt: &'static str, src: &'static str) -> Badge {
    Badge {
        alt,
        src,
        height_px: 40,
    }
}

static ABOUT_LINKS: [FooterLink; 4] = [
    link("Giới thiệu", "/gioi-thieu"),
    link("Tuyển dụng", "/tuyen-dung"),
    link("Tin tức", "/tin-tuc"),
    link("Liên hệ", "/lien-he"),
];

static SUPPORT_LINKS: [FooterLink; 4] = [
    link("Trung tâm trợ giúp", "/tro-giup"),
    link("Chính sách bảo hành", "/chinh-sach-bao-hanh"),
    link("Vận chuyển", "/van-chuyen"),
    link("Thanh toán", "/thanh-toan"),
];

static POLICY_LINKS: [FooterLink; 4] = [
    link("Chính sách bảo mật", "/chinh-sach-bao-mat"),
    link("Điều khoản sử dụng", "/dieu-khoan-su-dung"),
    link("Chính sách đổi trả", "/chinh-sach-doi-tra"),
    link("Chính sách vận chuyển", "/chinh-sach-van-chuyen"),
];

static SECTIONS: [FooterSection; 3] = [
    FooterSection {
        heading: "Về chúng tôi",
        links: &ABOUT_LINKS,
    },
    FooterSection {
        heading: "Hỗ trợ khách hàng",
        links: &SUPPORT_LINKS,
    },
    FooterSection {
        heading: "Chính sách",
        links: &POLICY_LINKS,
    },
];

static CONTACT: [ContactLine; 3] = [
    ContactLine {
        icon: IconKind::MapMarker,
        text: "123 Nguyễn Huệ, Quận 1, TP. Hồ Chí Minh",
    },
    ContactLine {
        icon: IconKind::Phone,
        text: "1900 1234",
    },
    ContactLine {
        icon: IconKind::Envelope,
        text: "contact@shopeasy.vn",
    },
];

static SOCIAL: [SocialLink; 4] = [
    SocialLink {
        icon: IconKind::Facebook,
        label: "Facebook",
        target: NavigationTarget::from_static("https://www.facebook.com"),
        color: ColorToken::BLUE_500,
    },
    SocialLink {
        icon: IconKind::Twitter,
        label: "Twitter",
        target: NavigationTarget::from_static("https://twitter.com"),
        color: ColorToken::BLUE_400,
    },
    SocialLink {
        icon: IconKind::Instagram,
        label: "Instagram",
        target: NavigationTarget::from_static("https://www.instagram.com"),
        color: ColorToken::PINK_500,
    },
    SocialLink {
        icon: IconKind::Youtube,
        label: "YouTube",
        target: NavigationTarget::from_static("https://www.youtube.com"),
        color: ColorToken::RED_500,
    },
];

static PAYMENT_BADGES: [Badge; 4] = [
    payment_badge("Visa", "https://via.placeholder.com/80x30?text=VISA"),
    payment_badge("Mastercard", "https://via.placeholder.com/80x30?text=MASTERCARD"),
    payment_badge("PayPal", "https://via.placeholder.com/80x30?text=PAYPAL"),
    payment_badge("MoMo", "https://via.placeholder.com/80x30?text=MOMO"),
];

static TRUST_BADGES: [Badge; 3] = [
    trust_badge(
        "Bộ Công Thương",
        "https://via.placeholder.com/120x40?text=BO+CONG+THUONG",
    ),
    trust_badge("DMCA Protected", "https://via.placeholder.com/120x40?text=DMCA"),
    trust_badge("SSL Secured", "https://via.placeholder.com/120x40?text=SSL"),
];

/// The footer's literal content
pub fn footer_content() -> FooterContent {
    FooterContent {
        logo_size: SizeVariant::Large,
        copyright: "© 2025 ShopEasy. Tất cả các quyền đã được bảo lưu.",
        contact: &CONTACT,
        social: &SOCIAL,
        sections: &SECTIONS,
        newsletter: Newsletter {
            heading: "Đăng ký nhận tin",
            description: "Nhận thông tin về sản phẩm mới và khuyến mãi hấp dẫn",
            placeholder: "Email của bạn",
        },
        payment_badges: &PAYMENT_BADGES,
        tagline: "ShopEasy - Nền tảng mua sắm trực tuyến hàng đầu Việt Nam",
        registration: "Giấy chứng nhận Đăng ký Kinh doanh số 0123456789 do Sở Kế hoạch và \
                       Đầu tư TP. Hồ Chí Minh cấp ngày 01/01/2025",
        trust_badges: &TRUST_BADGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_sections_in_order() {
        let headings: Vec<_> = footer_content().sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Về chúng tôi", "Hỗ trợ khách hàng", "Chính sách"]);
    }

    #[test]
    fn test_every_section_has_four_internal_paths() {
        for section in footer_content().sections {
            assert_eq!(section.links.len(), 4, "{}", section.heading);
            for link in section.links {
                assert!(link.target.as_str().starts_with('/'), "{}", link.label);
            }
        }
    }

    #[test]
    fn test_badge_heights() {
        let content = footer_content();
        assert!(content.payment_badges.iter().all(|b| b.height_px == 30));
        assert!(content.trust_badges.iter().all(|b| b.height_px == 40));
    }

    #[test]
    fn test_social_links_are_absolute_urls() {
        for social in footer_content().social {
            assert!(social.target.as_str().starts_with("https://"), "{}", social.label);
        }
    }

    #[test]
    fn test_registration_text_is_single_spaced() {
        let registration = footer_content().registration;
        assert!(registration.contains("Sở Kế hoạch và Đầu tư"));
        assert!(!registration.contains("  "));
    }
}
