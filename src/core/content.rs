//! Static page content for the KAVVI CRM landing page
//!
//! Everything the sections render lives here as plain `'static` data so the
//! page can be composed without any runtime loading. Icon tags are typed
//! (`IconKind`) instead of free-form strings, so a section can never refer
//! to an icon that has no asset.

/// Icons referenced by the content model and the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Bot,
    MessageSquare,
    FileText,
    Send,
    CheckSquare,
    BarChart,
    MousePointer,
    Plug,
    TrendingUp,
    Users,
    Target,
    Kanban,
    List,
    MessageCircle,
    Eye,
    ArrowRight,
    Zap,
    Star,
    Quote,
    Check,
    Clock,
    Shield,
    Mail,
    Phone,
    MapPin,
    Calendar,
    CheckCircle,
    AlertCircle,
    Loader,
    Menu,
    X,
}

impl IconKind {
    /// Asset name under `/icons/` (without the `.svg` extension)
    pub fn asset_name(self) -> &'static str {
        match self {
            IconKind::Bot => "bot",
            IconKind::MessageSquare => "message-square",
            IconKind::FileText => "file-text",
            IconKind::Send => "send",
            IconKind::CheckSquare => "check-square",
            IconKind::BarChart => "bar-chart",
            IconKind::MousePointer => "mouse-pointer",
            IconKind::Plug => "plug",
            IconKind::TrendingUp => "trending-up",
            IconKind::Users => "users",
            IconKind::Target => "target",
            IconKind::Kanban => "kanban",
            IconKind::List => "list",
            IconKind::MessageCircle => "message-circle",
            IconKind::Eye => "eye",
            IconKind::ArrowRight => "arrow-right",
            IconKind::Zap => "zap",
            IconKind::Star => "star",
            IconKind::Quote => "quote",
            IconKind::Check => "check",
            IconKind::Clock => "clock",
            IconKind::Shield => "shield",
            IconKind::Mail => "mail",
            IconKind::Phone => "phone",
            IconKind::MapPin => "map-pin",
            IconKind::Calendar => "calendar",
            IconKind::CheckCircle => "check-circle",
            IconKind::AlertCircle => "alert-circle",
            IconKind::Loader => "loader",
            IconKind::Menu => "menu",
            IconKind::X => "x",
        }
    }

    /// Public path of the SVG asset
    pub fn asset_path(self) -> String {
        format!("/icons/{}.svg", self.asset_name())
    }
}

/// Which mock preview a product view card renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Kanban,
    List,
    Inbox,
}

impl ViewKind {
    pub fn icon(self) -> IconKind {
        match self {
            ViewKind::Kanban => IconKind::Kanban,
            ViewKind::List => IconKind::List,
            ViewKind::Inbox => IconKind::MessageCircle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandColors {
    pub primary: &'static str,
    pub accent: &'static str,
    pub base: &'static str,
}

#[derive(Debug)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub colors: BrandColors,
}

#[derive(Debug)]
pub struct Hero {
    pub headline: &'static str,
    /// Part of the headline rendered with the accent color
    pub highlight: &'static str,
    pub subhead: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub trial_days: u32,
}

impl Hero {
    /// Split the headline around the highlighted phrase.
    ///
    /// Returns `(before, highlight, after)`; when the phrase is missing the
    /// whole headline comes back in `before`.
    pub fn headline_parts(&self) -> (&'static str, Option<&'static str>, &'static str) {
        let headline: &'static str = self.headline;
        match headline.find(self.highlight) {
            Some(start) if !self.highlight.is_empty() => {
                let end = start + self.highlight.len();
                (&headline[..start], Some(self.highlight), &headline[end..])
            }
            _ => (headline, None, ""),
        }
    }
}

#[derive(Debug)]
pub struct ViewItem {
    pub kind: ViewKind,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ViewsSection {
    pub title: &'static str,
    pub items: &'static [ViewItem],
}

#[derive(Debug)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

#[derive(Debug)]
pub struct FeatureGroup {
    pub title: &'static str,
    pub items: &'static [FeatureItem],
}

#[derive(Debug)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Debug)]
pub struct Company {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug)]
pub struct SocialProof {
    pub title: &'static str,
    pub metrics: &'static [Metric],
    pub testimonials: &'static [Testimonial],
    pub companies: &'static [Company],
}

#[derive(Debug)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

#[derive(Debug)]
pub struct UseCases {
    pub title: &'static str,
    pub cases: &'static [UseCase],
}

#[derive(Debug)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    /// Plans without a list price show a "custom pricing" hint
    pub fn is_custom_priced(&self) -> bool {
        self.price == "Consulte"
    }
}

#[derive(Debug)]
pub struct Pricing {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub plans: &'static [Plan],
    pub note: &'static str,
}

#[derive(Debug)]
pub struct FinalCta {
    pub headline: &'static str,
    pub subhead: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug)]
pub struct FooterCompany {
    pub name: &'static str,
    pub address: &'static str,
}

#[derive(Debug)]
pub struct FooterLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct Footer {
    pub company: FooterCompany,
    pub links: &'static [FooterLink],
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Full content tree of the landing page
#[derive(Debug)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: &'static [NavItem],
    pub hero: Hero,
    pub views: ViewsSection,
    pub features: FeatureGroup,
    pub productivity: FeatureGroup,
    pub social_proof: SocialProof,
    pub use_cases: UseCases,
    pub pricing: Pricing,
    pub final_cta: FinalCta,
    pub footer: Footer,
}

static SITE: SiteContent = SiteContent {
    brand: Brand {
        name: "KAVVI CRM",
        tagline: "WhatsApp-first CRM",
        colors: BrandColors {
            primary: "#002C57",
            accent: "#28C4AC",
            base: "#F4F6F9",
        },
    },
    nav: &[
        NavItem {
            name: "Recursos",
            href: "#recursos",
        },
        NavItem {
            name: "Preços",
            href: "#precos",
        },
        NavItem {
            name: "Clientes",
            href: "#clientes",
        },
        NavItem {
            name: "Suporte",
            href: "#suporte",
        },
    ],
    hero: Hero {
        headline: "O CRM WhatsApp-first para captar e converter leads.",
        highlight: "WhatsApp-first",
        subhead: "Centralize conversas, automatize follow-ups e feche negócios mais rápido.",
        cta_primary: "Teste grátis",
        cta_secondary: "Agendar demo",
        trial_days: 3,
    },
    views: ViewsSection {
        title: "3 visões para acelerar seu dia: Funil | Lista | Inbox.",
        items: &[
            ViewItem {
                kind: ViewKind::Kanban,
                name: "Kanban",
                description: "Funil de vendas visual com arrastar e soltar",
            },
            ViewItem {
                kind: ViewKind::List,
                name: "Lista",
                description: "Lista completa com filtros avançados",
            },
            ViewItem {
                kind: ViewKind::Inbox,
                name: "Inbox",
                description: "Multicanal: WhatsApp, Instagram, Facebook e Telegram",
            },
        ],
    },
    features: FeatureGroup {
        title: "Recursos WhatsApp-first",
        items: &[
            FeatureItem {
                title: "Chatbots no WhatsApp",
                description: "Colete dados, qualifique e direcione conversas 24/7.",
                icon: IconKind::Bot,
            },
            FeatureItem {
                title: "Inbox Unificado",
                description: "Todos os canais em um só lugar: WhatsApp, Instagram, Facebook e Telegram.",
                icon: IconKind::MessageSquare,
            },
            FeatureItem {
                title: "Modelos WhatsApp",
                description: "Biblioteca com mídia, botões e variáveis.",
                icon: IconKind::FileText,
            },
            FeatureItem {
                title: "Broadcast & Automação",
                description: "Nutrição e campanhas com limites e horários de silêncio.",
                icon: IconKind::Send,
            },
        ],
    },
    productivity: FeatureGroup {
        title: "Produtividade da equipe",
        items: &[
            FeatureItem {
                title: "Tarefas & Chat interno",
                description: "Tarefas a partir de mensagens; chat 1:1 e grupos.",
                icon: IconKind::CheckSquare,
            },
            FeatureItem {
                title: "Analytics em tempo real",
                description: "Relatórios e painéis personalizáveis (KAVVI Compass).",
                icon: IconKind::BarChart,
            },
            FeatureItem {
                title: "Formulários & Botão de chat",
                description: "Capture leads e envie direto para o funil.",
                icon: IconKind::MousePointer,
            },
            FeatureItem {
                title: "Integrações",
                description: "Google Agenda, Meta, Telegram e mais.",
                icon: IconKind::Plug,
            },
        ],
    },
    social_proof: SocialProof {
        title: "Escolhido por equipes que vendem de verdade.",
        metrics: &[
            Metric {
                value: "+32%",
                label: "Taxa de resposta",
            },
            Metric {
                value: "2.5x",
                label: "Velocidade de vendas",
            },
            Metric {
                value: "89%",
                label: "Satisfação do cliente",
            },
        ],
        testimonials: &[
            Testimonial {
                text: "O KAVVI transformou nossa operação de vendas. Conseguimos organizar todas as conversas do WhatsApp e aumentamos nossa conversão em 40%.",
                author: "Marina Santos",
                role: "Gerente de Vendas",
                company: "TechSolutions",
            },
            Testimonial {
                text: "Finalmente um CRM que entende como trabalhamos no Brasil. A integração com WhatsApp Business é perfeita.",
                author: "Carlos Mendes",
                role: "Diretor Comercial",
                company: "Digital Plus",
            },
        ],
        companies: &[
            Company {
                name: "TechSolutions",
                logo: "demo-logo-1",
            },
            Company {
                name: "Digital Plus",
                logo: "demo-logo-2",
            },
            Company {
                name: "StartupBR",
                logo: "demo-logo-3",
            },
            Company {
                name: "SalesForce Pro",
                logo: "demo-logo-4",
            },
        ],
    },
    use_cases: UseCases {
        title: "Como o KAVVI ajuda",
        cases: &[
            UseCase {
                title: "Vendas",
                description: "Capturar leads do WhatsApp, organizar no funil e fechar negócios mais rápido.",
                icon: IconKind::TrendingUp,
            },
            UseCase {
                title: "Equipes",
                description: "Múltiplos números, controle de acesso e colaboração em tempo real.",
                icon: IconKind::Users,
            },
            UseCase {
                title: "Gestores",
                description: "Tarefas, metas, desempenho e SLAs em painéis personalizáveis.",
                icon: IconKind::Target,
            },
        ],
    },
    pricing: Pricing {
        title: "Planos",
        subtitle: "Escolha o plano ideal para sua equipe",
        plans: &[
            Plan {
                name: "Essential",
                description: "Para começar",
                price: "Consulte",
                features: &[
                    "Inbox unificado",
                    "Funis ilimitados",
                    "Tarefas e lembretes",
                    "Suporte por email",
                ],
                highlighted: false,
            },
            Plan {
                name: "Professional",
                description: "Mais popular",
                price: "Consulte",
                features: &[
                    "Tudo do Essential",
                    "Salesbot no-code",
                    "Automações avançadas",
                    "Relatórios detalhados",
                    "Suporte prioritário",
                ],
                highlighted: true,
            },
            Plan {
                name: "Enterprise",
                description: "Para grandes equipes",
                price: "Consulte",
                features: &[
                    "Tudo do Professional",
                    "Dados avançados",
                    "Permissões granulares",
                    "Integrações customizadas",
                    "Gerente de sucesso",
                ],
                highlighted: false,
            },
        ],
        note: "Trial gratuito de 3 dias em todos os planos",
    },
    final_cta: FinalCta {
        headline: "Experimente vender no seu ritmo.",
        subhead: "Ative seu trial agora e tenha seu WhatsApp trabalhando por você.",
        cta_primary: "Teste grátis",
        cta_secondary: "Agendar demo",
    },
    footer: Footer {
        company: FooterCompany {
            name: "KAVVI CRM",
            address: "São Paulo, SP - Brasil",
        },
        links: &[
            FooterLink {
                name: "Termos de Uso",
                url: "/termos",
            },
            FooterLink {
                name: "Política de Privacidade",
                url: "/privacidade",
            },
            FooterLink {
                name: "Ajuda",
                url: "/ajuda",
            },
            FooterLink {
                name: "Contato",
                url: "/contato",
            },
        ],
        email: "contato@kavvicrm.com.br",
        phone: "+55 11 9999-9999",
    },
};

/// The landing page content tree
pub fn site() -> &'static SiteContent {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_parts_split_around_highlight() {
        let (before, highlight, after) = site().hero.headline_parts();
        assert_eq!(before, "O CRM ");
        assert_eq!(highlight, Some("WhatsApp-first"));
        assert_eq!(after, " para captar e converter leads.");
    }

    #[test]
    fn test_headline_parts_without_highlight() {
        let hero = Hero {
            headline: "Plain headline",
            highlight: "missing",
            subhead: "",
            cta_primary: "",
            cta_secondary: "",
            trial_days: 3,
        };
        assert_eq!(hero.headline_parts(), ("Plain headline", None, ""));
    }

    #[test]
    fn test_views_cover_each_kind_once() {
        let kinds: Vec<ViewKind> = site().views.items.iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![ViewKind::Kanban, ViewKind::List, ViewKind::Inbox]);
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let highlighted: Vec<&str> = site()
            .pricing
            .plans
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.name)
            .collect();
        assert_eq!(highlighted, vec!["Professional"]);
        assert!(site().pricing.plans.iter().all(Plan::is_custom_priced));
    }

    #[test]
    fn test_icon_asset_paths() {
        assert_eq!(IconKind::Bot.asset_path(), "/icons/bot.svg");
        assert_eq!(IconKind::BarChart.asset_name(), "bar-chart");
        assert_eq!(ViewKind::Inbox.icon(), IconKind::MessageCircle);
    }

    #[test]
    fn test_trial_days_match_pricing_note() {
        let days = site().hero.trial_days.to_string();
        assert!(site().pricing.note.contains(&days));
    }
}
