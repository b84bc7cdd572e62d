// Illustrative alert records. Not derived from the generated tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Urgent,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EquipmentIssue {
    pub date: &'static str,
    pub facility: &'static str,
    pub department: &'static str,
    pub equipment: &'static str,
    pub reporter: &'static str,
    pub phone: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy)]
pub struct DelayedTask {
    pub due_date: &'static str,
    pub facility: &'static str,
    pub department: &'static str,
    pub task: &'static str,
    pub owner: &'static str,
    pub phone: &'static str,
    pub delay_days: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StaffingNeed {
    pub facility: &'static str,
    pub department: &'static str,
    pub shortage: &'static str,
    pub specialty: &'static str,
    pub priority: Priority,
}

pub const EQUIPMENT_ISSUES: &[EquipmentIssue] = &[
    EquipmentIssue {
        date: "2025-01-20",
        facility: "Al-Assad University Hospital",
        department: "Emergency",
        equipment: "Mechanical ventilator",
        reporter: "Dr. Mohammad Ahmad Al-Saeed",
        phone: "0944123456",
        priority: Priority::Urgent,
    },
    EquipmentIssue {
        date: "2025-01-19",
        facility: "Children's University Hospital",
        department: "Intensive Care",
        equipment: "Infusion pump",
        reporter: "Dr. Fatima Ali Hammoud",
        phone: "0955234567",
        priority: Priority::Urgent,
    },
    EquipmentIssue {
        date: "2025-01-18",
        facility: "Al-Sham Health Center",
        department: "Laboratory",
        equipment: "Blood analyser",
        reporter: "Dr. Khaled Mahmoud Shaheen",
        phone: "0946345678",
        priority: Priority::Medium,
    },
    EquipmentIssue {
        date: "2025-01-17",
        facility: "Maternity University Hospital",
        department: "Operating Theatre",
        equipment: "Surgical endoscope",
        reporter: "Dr. Nour Al-Din Abdullah",
        phone: "0957456789",
        priority: Priority::Urgent,
    },
];

pub const DELAYED_TASKS: &[DelayedTask] = &[
    DelayedTask {
        due_date: "2025-01-15",
        facility: "Al-Mouwasat University Hospital",
        department: "Radiology",
        task: "Radiology system update",
        owner: "Dr. Rana Saleh Al-Masri",
        phone: "0955234567",
        delay_days: 5,
    },
    DelayedTask {
        due_date: "2025-01-12",
        facility: "Douma Health Center",
        department: "Pharmacy",
        task: "Monthly drug inventory",
        owner: "Dr. Omar Hassan Al-Khouri",
        phone: "0946345678",
        delay_days: 8,
    },
    DelayedTask {
        due_date: "2025-01-10",
        facility: "Ophthalmology University Hospital",
        department: "Operating Theatre",
        task: "Monthly operations report",
        owner: "Dr. Layla Ibrahim Najjar",
        phone: "0957456789",
        delay_days: 10,
    },
];

pub const STAFFING_NEEDS: &[StaffingNeed] = &[
    StaffingNeed {
        facility: "Oncology Hospital",
        department: "Nursing",
        shortage: "3 nurses",
        specialty: "Oncology nursing",
        priority: Priority::Urgent,
    },
    StaffingNeed {
        facility: "Al-Qaboun Health Center",
        department: "Laboratory",
        shortage: "1 lab technician",
        specialty: "Medical analysis",
        priority: Priority::Medium,
    },
    StaffingNeed {
        facility: "Al-Basel Heart Hospital",
        department: "Cardiology",
        shortage: "1 specialist physician",
        specialty: "Cardiac surgery",
        priority: Priority::Urgent,
    },
    StaffingNeed {
        facility: "Jaramana Health Center",
        department: "Radiology",
        shortage: "1 radiology technician",
        specialty: "Medical imaging",
        priority: Priority::Medium,
    },
];

/// Remedies listed under every staffing shortage.
pub const STAFFING_REMEDIES: &[&str] = &[
    "Publish a job posting",
    "Transfer staff from another facility",
    "Contact the universities",
];
