//! Static page content: headings, narrative, metric callouts and charts.

use super::{Content, MetricSpec, Page, Section, Stat};
use crate::charts::{ChartSpec, Palette};

const EMPTY_MESSAGE: &str = "Cannot display visualization: Data failed to load.";

const FAILURE_LEGEND: &str = "Failure in Life (1=Yes, 0=No)";

const AGE_HISTOGRAM: ChartSpec = ChartSpec::Histogram {
    title: "Distribution of Age Midpoints",
    x: "age_midpoint",
    nbins: 10,
    x_title: "Age Midpoint",
    y_title: "Frequency",
    marginal_box: true,
    palette: Palette::T10,
};

const MARITAL_PIE: ChartSpec = ChartSpec::Pie {
    title: "Marital Status of Addicts",
    names: "marital_status",
    hole: 0.3,
};

const EDUCATION_HEATMAP: ChartSpec = ChartSpec::Heatmap {
    title: "Education Level vs. Mental Health Status",
    rows: "education_level",
    cols: "mental_health_status",
    x_title: "Mental Health Status",
    y_title: "Education Level",
};

const FRIENDS_BARS: ChartSpec = ChartSpec::GroupedCount {
    title: "Friends Influence vs. Failure in Life",
    x: "friends_influence",
    color: "failure_in_life_numeric",
    x_title: "Friends Influence",
    y_title: "Count",
    legend: FAILURE_LEGEND,
    palette: Palette::Vivid,
};

const FAMILY_BARS: ChartSpec = ChartSpec::GroupedCount {
    title: "Type of Addiction by Family History of Drug Use",
    x: "addicted_with",
    color: "family_history_of_drug_use",
    x_title: "Type of Addiction",
    y_title: "Count",
    legend: "Family History of Drug Use",
    palette: Palette::Bold,
};

const SMOKING_BOX: ChartSpec = ChartSpec::Box {
    title: "Age of First Use Distribution by Mental/Emotional Problem and Smoking",
    x: "mental/emotional_problem",
    y: "age_of_first_use_midpoint",
    color: "smoking",
    x_title: "Mental/Emotional Problem",
    y_title: "Age of First Use (Midpoint)",
    legend: "Smoking",
    palette: Palette::Dark24,
};

const AGE_BY_HEALTH_BARS: ChartSpec = ChartSpec::GroupedMean {
    title: "Average Age Midpoint by Mental Health Status and Failure in Life",
    x: "mental_health_status",
    y: "age_midpoint",
    color: "failure_in_life_numeric",
    x_title: "Mental Health Status",
    y_title: "Average Age Midpoint",
    legend: FAILURE_LEGEND,
    palette: Palette::Vivid,
};

const MARITAL_HEATMAP: ChartSpec = ChartSpec::Heatmap {
    title: "Marital Status vs. Mental/Emotional Problem",
    rows: "marital_status",
    cols: "mental/emotional_problem",
    x_title: "Mental/Emotional Problem",
    y_title: "Marital Status",
};

const RELIGION_BOX: ChartSpec = ChartSpec::Box {
    title: "Age of First Use Distribution by Religion and Type of Addiction",
    x: "religion",
    y: "age_of_first_use_midpoint",
    color: "addicted_with",
    x_title: "Religion",
    y_title: "Age of First Use (Midpoint)",
    legend: "Type of Addiction",
    palette: Palette::Dark24,
};

const HOME_METRICS: &[MetricSpec] = &[
    MetricSpec::Computed {
        label: "Respondents",
        stat: Stat::RowCount,
        help: "Number of survey records in the dataset.",
    },
    MetricSpec::Computed {
        label: "Median Age Midpoint",
        stat: Stat::Median("age_midpoint"),
        help: "Median of the age range midpoints.",
    },
    MetricSpec::Computed {
        label: "Most Common Marital Status",
        stat: Stat::Mode("marital_status"),
        help: "Most frequent marital status category.",
    },
    MetricSpec::Computed {
        label: "Most Common Substance",
        stat: Stat::Mode("addicted_with"),
        help: "Most frequent type of addiction reported.",
    },
];

const KEY_FINDINGS: &[MetricSpec] = &[
    MetricSpec::Fixed {
        label: "Peak Age Group",
        value: "20 - 25 Years",
        help: "Highest frequency of addiction at age midpoints between 20 and 25.",
    },
    MetricSpec::Fixed {
        label: "Prevalence: Unmarried",
        value: "67.9%",
        help: "Percentage of addicts categorized as Unmarried (67.9% from Pie Chart).",
    },
    MetricSpec::Fixed {
        label: "Highest Mental Health Risk",
        value: "Tension/Anxiety",
        help: "The highest count of a single problem: Unmarried addicts reporting Tension/Anxiety (242).",
    },
    MetricSpec::Fixed {
        label: "Highest Poor MH Group",
        value: "Undergrad/Poor MH",
        help: "The largest number reporting Poor Mental Health is the Undergraduate/Under Degree group (79).",
    },
];

const SOCIAL_SUMMARY: &str = "Based on the display shown, it shows a summary of the \
demographic and mental health risk profile of the addict population studied. The data has \
shown that addiction focuses on 'young adults' with the 'Most Common Age Range' being at the \
age of '20-25 years' which initially shows that early onset is common. Looking at the social \
angle, the value achieved, which is 67.9%, is from 'Not Married'. It clearly shows that \
addiction is very high among those who do not have a partner or are married. In addition, the \
'High Risk Group' metric has shown several dangerous factors, namely individuals with an \
educational level of 'Bachelor's/Undergraduate' have contributed the highest number in the \
'Poor Mental Health' category, which is 79 individuals. It is clear that the data shows that \
there is a great risk among individuals with a low university education level and at the same \
time facing mental stress problems. Next, the majority have reported 'Never' having a 'Family \
History of Drug Use' thus showing that risk factors are often personal and not due to heredity";

const CORRELATION_SUMMARY: &str = "Based on the summary above, the 'Summary of Key Findings' \
shows a combination of critical insights into the demographic and psychological profiles of \
the addict population. Looking at the data, it shows that addiction is highest in 'young \
adults' with the 'Peak Age Group' being '20-25 Years'. It shows that interventions should \
target this age range aggressively. Looking at the social aspect, the majority of addicts \
'Not Married' have reached a value of 67.9% and in conclusion, it shows that marital status \
is a protective factor. Next, looking at the psychological aspect, the 'Highest Mental Health \
Risk' that has been identified is 'Tension/Anxiety' which has displayed the highest frequency \
results in the relevant heat map for example Not Married vs. Mental/Emotional Problems. In \
addition, the 'Highest Poor MH Group' which has been identified as the \
'Pre-degree/Undergraduate' level, this education group has achieved the highest value in the \
heat map and as many as 79 individuals 'Weak Mental Health' has outlined a very significant \
mental health crisis among those with lower levels of higher education.";

const HOME_INTRO: &str = "This dashboard presents a survey of people receiving treatment for \
substance use: who they are, what they use, and which social and mental-health factors \
surround their addiction. The charts are descriptive; the findings in the text are \
observations read off those charts.";

const HOME_GUIDE: &str = "main: demographics and key triggers (age, marital status, \
education vs. mental health).\n\
Studying Social and Mental Health Risk Factors: friends, family history and smoking.\n\
Identifying Correlations between Risk and Life Outcome: key findings and how risk factors \
relate to failure in life.";

/// All pages in sidebar order.
pub static PAGES: &[Page] = &[
    Page {
        id: "home",
        title: "Homepage",
        icon: "⌂",
        section: Section::Menu,
        default: true,
        heading: "Student Survey",
        empty_message: EMPTY_MESSAGE,
        content: &[
            Content::Info(HOME_INTRO),
            Content::Subheader("Dataset at a Glance"),
            Content::Metrics(HOME_METRICS),
            Content::Divider,
            Content::Subheader("Pages"),
            Content::Markdown(HOME_GUIDE),
        ],
    },
    Page {
        id: "main",
        title: "main",
        icon: "✎",
        section: Section::Menu,
        default: false,
        heading: "Drug Use Demographics and Key Triggers Analysis",
        empty_message: "Please check the data source URL or file content.",
        content: &[
            Content::Subheader("Data Preview"),
            Content::Preview { rows: 5 },
            Content::Success("Analyzing Demographics and Key Triggers of Drug Use"),
            Content::Chart {
                heading: "Distribution of Age Midpoints",
                spec: AGE_HISTOGRAM,
            },
            Content::Chart {
                heading: "Marital Status of Addicts",
                spec: MARITAL_PIE,
            },
            Content::Chart {
                heading: "Education Level vs. Mental Health Status (Heatmap)",
                spec: EDUCATION_HEATMAP,
            },
        ],
    },
    Page {
        id: "social",
        title: "Studying Social and Mental Health Risk Factors Among Addicts",
        icon: "⚇",
        section: Section::Analysis,
        default: false,
        heading: "Studying Social and Mental Health Risk Factors Among Addicts",
        empty_message: EMPTY_MESSAGE,
        content: &[
            Content::Success(SOCIAL_SUMMARY),
            Content::Success("Studying Social and Mental Health Risk Factors Among Addicts"),
            Content::Chart {
                heading: "Friends Influence vs. Failure in Life",
                spec: FRIENDS_BARS,
            },
            Content::Chart {
                heading: "Type of Addiction by Family History of Drug Use",
                spec: FAMILY_BARS,
            },
            Content::Chart {
                heading: "Age of First Use Distribution by Mental/Emotional Problem and Smoking",
                spec: SMOKING_BOX,
            },
            Content::Divider,
        ],
    },
    Page {
        id: "correlations",
        title: "Identifying Correlations between Risk and Life Outcome",
        icon: "↗",
        section: Section::Analysis,
        default: false,
        heading: "Identifying Correlations between Risk and Life Outcome",
        empty_message: EMPTY_MESSAGE,
        content: &[
            Content::Subheader("Key Findings Correlations between Risk and Life Outcome"),
            Content::Metrics(KEY_FINDINGS),
            Content::Divider,
            Content::Success(CORRELATION_SUMMARY),
            Content::Success("Identifying Correlations between Risk and Life Outcome"),
            Content::Chart {
                heading: "Average Age Midpoint by Mental Health Status and Failure in Life",
                spec: AGE_BY_HEALTH_BARS,
            },
            Content::Chart {
                heading: "Marital Status vs. Mental/Emotional Problem (Heatmap)",
                spec: MARITAL_HEATMAP,
            },
            Content::Chart {
                heading: "Age of First Use Distribution by Religion and Type of Addiction",
                spec: RELIGION_BOX,
            },
        ],
    },
];
