use crate::prefs::Locale;

#[derive(Clone, Debug, PartialEq)]
pub struct StepDescriptor {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub screen: &'static str,
}

pub struct FeatureCopy {
    pub heading: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub struct PageCopy {
    pub nav_how: &'static str,
    pub nav_cta: &'static str,
    pub hero_eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub hero_secondary: &'static str,
    pub steps_heading: &'static str,
    pub steps_intro: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub go_to_step: &'static str,
    pub employers: FeatureCopy,
    pub workers: FeatureCopy,
    pub faq_heading: &'static str,
    pub faq: &'static [(&'static str, &'static str)],
    pub footer_heading: &'static str,
    pub footer_text: &'static str,
    pub footer_cta: &'static str,
    pub rights: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
}

const STEPS_EN: [StepDescriptor; 5] = [
    StepDescriptor {
        label: "01",
        title: "Post a shift",
        description: "Describe the role, the hours and the site. Templates remember everything from last time.",
        screen: "/assets/screens/post-shift.webp",
    },
    StepDescriptor {
        label: "02",
        title: "Get matched",
        description: "Vetted workers nearby with the right certifications see your shift first.",
        screen: "/assets/screens/matches.webp",
    },
    StepDescriptor {
        label: "03",
        title: "Confirm your crew",
        description: "Accept applicants with one tap. Everyone gets directions, dress code and a contact.",
        screen: "/assets/screens/crew.webp",
    },
    StepDescriptor {
        label: "04",
        title: "Check in on site",
        description: "Geofenced check-in records arrival and break times without paper timesheets.",
        screen: "/assets/screens/check-in.webp",
    },
    StepDescriptor {
        label: "05",
        title: "Pay out same day",
        description: "Approve hours and workers are paid the same evening. Invoices land in your inbox.",
        screen: "/assets/screens/payout.webp",
    },
];

const STEPS_ES: [StepDescriptor; 5] = [
    StepDescriptor {
        label: "01",
        title: "Publica un turno",
        description: "Describe el puesto, el horario y el lugar. Las plantillas recuerdan todo de la última vez.",
        screen: "/assets/screens/post-shift.webp",
    },
    StepDescriptor {
        label: "02",
        title: "Recibe candidatos",
        description: "Trabajadores verificados y cercanos con las certificaciones adecuadas ven tu turno primero.",
        screen: "/assets/screens/matches.webp",
    },
    StepDescriptor {
        label: "03",
        title: "Confirma tu equipo",
        description: "Acepta solicitudes con un toque. Todos reciben indicaciones, código de vestimenta y un contacto.",
        screen: "/assets/screens/crew.webp",
    },
    StepDescriptor {
        label: "04",
        title: "Registro en el sitio",
        description: "El registro por geolocalización guarda llegadas y descansos sin hojas de horas en papel.",
        screen: "/assets/screens/check-in.webp",
    },
    StepDescriptor {
        label: "05",
        title: "Pago el mismo día",
        description: "Aprueba las horas y los trabajadores cobran esa misma tarde. Las facturas llegan a tu correo.",
        screen: "/assets/screens/payout.webp",
    },
];

static COPY_EN: PageCopy = PageCopy {
    nav_how: "How it works",
    nav_cta: "Book a demo",
    hero_eyebrow: "Staffing without the spreadsheets",
    hero_title: "Fill every shift, on time",
    hero_subtitle: "Staffline connects businesses with reliable, pre-vetted hourly workers and handles scheduling, check-in and payroll in one place.",
    hero_cta: "Post your first shift",
    hero_secondary: "I'm looking for work",
    steps_heading: "From request to payday",
    steps_intro: "Five steps, one app. Scroll through how a shift gets filled.",
    previous: "Previous",
    next: "Next",
    go_to_step: "Go to step",
    employers: FeatureCopy {
        heading: "For employers",
        body: "Cover sick calls, seasonal peaks and new locations without a recruiting team.",
        points: &[
            "Average fill time under two hours",
            "Background checks and certifications verified up front",
            "One invoice for every site and every worker",
        ],
        image: "/assets/employers.webp",
        image_alt: "Site manager reviewing a confirmed crew",
    },
    workers: FeatureCopy {
        heading: "For workers",
        body: "Choose the shifts that fit your week and get paid for them the same day.",
        points: &[
            "No minimum hours",
            "Ratings that follow you to every employer",
            "Same-day payouts with no fees",
        ],
        image: "/assets/workers.webp",
        image_alt: "Worker checking in at the start of a shift",
    },
    faq_heading: "Frequently asked questions",
    faq: &[
        (
            "Which industries do you cover?",
            "Hospitality, events, warehousing, retail and light industrial work. Contact us if your role is not listed.",
        ),
        (
            "How are workers vetted?",
            "Every worker passes an identity check, a reference check and role-specific certification checks before their first shift.",
        ),
        (
            "What does it cost?",
            "Employers pay an hourly rate that includes the worker's wage, insurance and our fee. There are no subscriptions.",
        ),
        (
            "Can I cancel a shift?",
            "Yes. Cancellations more than 24 hours before the start are free.",
        ),
    ],
    footer_heading: "Ready to fill your next shift?",
    footer_text: "Set up your company in minutes. Your first crew can be on site tomorrow.",
    footer_cta: "Get started",
    rights: "All rights reserved.",
    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist or has moved.",
    back_home: "Back to the homepage",
};

static COPY_ES: PageCopy = PageCopy {
    nav_how: "Cómo funciona",
    nav_cta: "Pide una demo",
    hero_eyebrow: "Personal sin hojas de cálculo",
    hero_title: "Cubre cada turno, a tiempo",
    hero_subtitle: "Staffline conecta empresas con trabajadores por horas fiables y verificados, y gestiona horarios, registros y nóminas en un solo lugar.",
    hero_cta: "Publica tu primer turno",
    hero_secondary: "Busco trabajo",
    steps_heading: "De la solicitud al pago",
    steps_intro: "Cinco pasos, una app. Desplázate para ver cómo se cubre un turno.",
    previous: "Anterior",
    next: "Siguiente",
    go_to_step: "Ir al paso",
    employers: FeatureCopy {
        heading: "Para empresas",
        body: "Cubre bajas, picos de temporada y nuevos locales sin un equipo de selección.",
        points: &[
            "Turnos cubiertos en menos de dos horas de media",
            "Antecedentes y certificaciones verificados de antemano",
            "Una sola factura para todos los centros y trabajadores",
        ],
        image: "/assets/employers.webp",
        image_alt: "Responsable revisando un equipo confirmado",
    },
    workers: FeatureCopy {
        heading: "Para trabajadores",
        body: "Elige los turnos que encajan en tu semana y cobra el mismo día.",
        points: &[
            "Sin mínimo de horas",
            "Valoraciones que te acompañan a cada empresa",
            "Pagos el mismo día sin comisiones",
        ],
        image: "/assets/workers.webp",
        image_alt: "Trabajador registrando su llegada al turno",
    },
    faq_heading: "Preguntas frecuentes",
    faq: &[
        (
            "¿Qué sectores cubrís?",
            "Hostelería, eventos, logística, comercio e industria ligera. Escríbenos si tu puesto no aparece.",
        ),
        (
            "¿Cómo se verifica a los trabajadores?",
            "Cada trabajador pasa una verificación de identidad, de referencias y de certificaciones del puesto antes de su primer turno.",
        ),
        (
            "¿Cuánto cuesta?",
            "Las empresas pagan una tarifa por hora que incluye el salario, el seguro y nuestra comisión. Sin suscripciones.",
        ),
        (
            "¿Puedo cancelar un turno?",
            "Sí. Las cancelaciones con más de 24 horas de antelación son gratuitas.",
        ),
    ],
    footer_heading: "¿Listo para cubrir tu próximo turno?",
    footer_text: "Configura tu empresa en minutos. Tu primer equipo puede estar en el sitio mañana.",
    footer_cta: "Empezar",
    rights: "Todos los derechos reservados.",
    not_found_title: "Página no encontrada",
    not_found_body: "La página que buscas no existe o se ha movido.",
    back_home: "Volver al inicio",
};

pub fn page_copy(locale: Locale) -> &'static PageCopy {
    match locale {
        Locale::En => &COPY_EN,
        Locale::Es => &COPY_ES,
    }
}

pub fn steps(locale: Locale) -> Vec<StepDescriptor> {
    match locale {
        Locale::En => STEPS_EN.to_vec(),
        Locale::Es => STEPS_ES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_the_same_steps() {
        let reference = steps(Locale::En);
        for locale in Locale::ALL {
            let localized = steps(locale);
            assert_eq!(localized.len(), reference.len());
            for (a, b) in localized.iter().zip(&reference) {
                assert_eq!(a.label, b.label);
                assert_eq!(a.screen, b.screen);
            }
        }
    }

    #[test]
    fn every_locale_has_the_same_faq_length() {
        for locale in Locale::ALL {
            assert_eq!(page_copy(locale).faq.len(), page_copy(Locale::En).faq.len());
        }
    }
}
